//! Note lifecycle handlers.
//!
//! # Responsibility
//! - Map the `/api/notes` REST surface onto `NoteService` calls.
//!
//! # Invariants
//! - Handlers are stateless: a repository and service are built per request
//!   from the shared connection and dropped before the response is sent.
//! - Client-supplied `id` and `trashed` fields are ignored where the
//!   operation owns them.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scribble_core::{
    Note, NoteDraft, NoteId, NoteService, NoteServiceError, SqliteNoteRepository,
};
use serde::Deserialize;

/// Inbound note body.
///
/// `id` and `trashed` are accepted for wire compatibility with clients that
/// echo full note objects back, but both are store-owned and ignored here.
#[derive(Debug, Deserialize)]
pub struct NotePayload {
    #[serde(default)]
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub trashed: Option<bool>,
}

impl NotePayload {
    fn into_draft(self) -> NoteDraft {
        NoteDraft::new(self.title, self.content)
    }
}

/// `GET /api/notes` — active notes only.
pub async fn list_active(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    with_service(&state, |service| service.list_active()).map(Json)
}

/// `GET /api/notes/trash` — trashed notes only.
pub async fn list_trashed(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    with_service(&state, |service| service.list_trashed()).map(Json)
}

/// `POST /api/notes` — create an active note with a store-assigned id.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NotePayload>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let draft = payload.into_draft();
    let note = with_service(&state, |service| service.create(&draft))?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// `PUT /api/notes/{id}` — replace title and content of an existing note.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<Note>, ApiError> {
    let draft = payload.into_draft();
    with_service(&state, |service| service.update(id, &draft)).map(Json)
}

/// `DELETE /api/notes/{id}` — soft delete: move the note to the trash.
pub async fn trash(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> Result<Json<Note>, ApiError> {
    with_service(&state, |service| service.trash(id)).map(Json)
}

/// `PUT /api/notes/restore/{id}` — move the note out of the trash.
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> Result<Json<Note>, ApiError> {
    with_service(&state, |service| service.restore(id)).map(Json)
}

/// `DELETE /api/notes/trash/{id}` — permanent delete.
pub async fn purge(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> Result<StatusCode, ApiError> {
    with_service(&state, |service| service.purge(id))?;
    Ok(StatusCode::NO_CONTENT)
}

fn with_service<T>(
    state: &AppState,
    op: impl FnOnce(&NoteService<SqliteNoteRepository<'_>>) -> Result<T, NoteServiceError>,
) -> Result<T, ApiError> {
    let conn = state
        .db
        .lock()
        .map_err(|_| ApiError::Internal("note store lock poisoned".to_string()))?;
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    op(&service).map_err(ApiError::from)
}
