//! Router assembly and server loop.
//!
//! # Responsibility
//! - Map each path+method pair to exactly one handler.
//! - Run the axum server on a dedicated tokio runtime.
//!
//! # Invariants
//! - The route table is the single place where paths are declared; handlers
//!   never register themselves.

use crate::routes::{health, notes};
use crate::state::AppState;
use axum::routing::{delete, get, put};
use axum::Router;
use log::info;
use tower_http::cors::CorsLayer;

/// Builds the full route table over the shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/notes", get(notes::list_active).post(notes::create))
        .route("/api/notes/trash", get(notes::list_trashed))
        .route("/api/notes/trash/:id", delete(notes::purge))
        .route("/api/notes/restore/:id", put(notes::restore))
        .route("/api/notes/:id", put(notes::update).delete(notes::trash))
        .route("/health", get(health::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves requests until the process exits.
pub fn serve(host: &str, port: u16, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let addr = format!("{host}:{port}");
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("event=http_serve module=server status=ok addr={addr}");
        axum::serve(listener, build_router(state)).await?;
        Ok(())
    })
}
