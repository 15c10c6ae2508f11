//! Note use-case service.
//!
//! # Responsibility
//! - Provide note lifecycle APIs: create, list, edit, trash, restore, purge.
//! - Return the stored record after every write so callers always see the
//!   store-assigned state.
//!
//! # Invariants
//! - `update` uses full title/content replacement semantics and never
//!   creates a record for an absent id.
//! - `trash`/`restore` flip `trashed` only; title/content survive the
//!   round trip unchanged.
//! - `purge` is the only operation that removes a record from storage.

use crate::model::note::{Note, NoteDraft, NoteId};
use crate::repo::note_repo::{NoteFilter, NoteRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one active note and returns the stored record.
    ///
    /// Any caller-side id is ignored by construction: a `NoteDraft` carries
    /// no id field and the store always assigns a fresh one.
    pub fn create(&self, draft: &NoteDraft) -> Result<Note, NoteServiceError> {
        let id = self.repo.create_note(draft)?;
        self.read_back(id, "created note not found in read-back")
    }

    /// Gets one note by id.
    pub fn get(&self, id: NoteId) -> Result<Note, NoteServiceError> {
        Ok(self.repo.get_note(id)?)
    }

    /// Lists every note regardless of trash state.
    pub fn list_all(&self) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.repo.list_notes(NoteFilter::All)?)
    }

    /// Lists notes in the main view (`trashed = false`).
    pub fn list_active(&self) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.repo.list_notes(NoteFilter::Active)?)
    }

    /// Lists notes in the trash view (`trashed = true`).
    pub fn list_trashed(&self) -> Result<Vec<Note>, NoteServiceError> {
        Ok(self.repo.list_notes(NoteFilter::Trashed)?)
    }

    /// Replaces title and content of an existing note.
    pub fn update(&self, id: NoteId, draft: &NoteDraft) -> Result<Note, NoteServiceError> {
        self.repo.update_note(id, draft)?;
        self.read_back(id, "updated note not found in read-back")
    }

    /// Moves one note to the trash.
    pub fn trash(&self, id: NoteId) -> Result<Note, NoteServiceError> {
        self.repo.set_trashed(id, true)?;
        self.read_back(id, "trashed note not found in read-back")
    }

    /// Moves one note out of the trash.
    pub fn restore(&self, id: NoteId) -> Result<Note, NoteServiceError> {
        self.repo.set_trashed(id, false)?;
        self.read_back(id, "restored note not found in read-back")
    }

    /// Permanently deletes one note.
    ///
    /// Not restricted to trashed notes: purging an active note succeeds.
    pub fn purge(&self, id: NoteId) -> Result<(), NoteServiceError> {
        Ok(self.repo.delete_note(id)?)
    }

    fn read_back(&self, id: NoteId, details: &'static str) -> Result<Note, NoteServiceError> {
        match self.repo.get_note(id) {
            Ok(note) => Ok(note),
            Err(RepoError::NotFound(_)) => Err(NoteServiceError::InconsistentState(details)),
            Err(other) => Err(other.into()),
        }
    }
}
