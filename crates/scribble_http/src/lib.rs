//! REST surface for the Scribble note store.
//!
//! # Responsibility
//! - Translate HTTP requests into `scribble_core` service calls.
//! - Hold no state between requests beyond the shared store handle.

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{build_router, serve};
pub use state::AppState;
