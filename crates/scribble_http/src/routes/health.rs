//! Liveness probe.

use axum::Json;
use serde_json::{json, Value};

/// `GET /health` — process liveness and core version.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": scribble_core::ping(),
        "version": scribble_core::core_version(),
    }))
}
