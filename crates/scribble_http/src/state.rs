//! Shared application state for HTTP handlers.
//!
//! # Invariants
//! - The SQLite connection is the only shared mutable resource; handlers
//!   take the lock for the duration of one store call and never hold it
//!   across an await point.

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a migrated/ready connection for sharing across handlers.
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }
}
