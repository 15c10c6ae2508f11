//! HTTP error mapping.
//!
//! # Responsibility
//! - Map service errors onto status codes and a stable JSON error body.
//!
//! # Invariants
//! - An absent id is always a 404, never a silent success.
//! - Store failures surface as 500 and are logged; they are not retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use scribble_core::{NoteId, NoteServiceError};
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    /// Requested note id does not exist in the store.
    NotFound(NoteId),
    /// Persistence or in-process failure; details stay in the log.
    Internal(String),
}

impl From<NoteServiceError> for ApiError {
    fn from(value: NoteServiceError) -> Self {
        match value {
            NoteServiceError::NoteNotFound(id) => Self::NotFound(id),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(id) => (StatusCode::NOT_FOUND, format!("note not found: {id}")),
            Self::Internal(details) => {
                error!("event=request_failed module=http status=error error={details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
