//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record persisted by the store.
//! - Provide lifecycle helpers for soft-delete semantics.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another note.
//! - `trashed` is the source of truth for trash state: a note is either
//!   active (`trashed == false`) or trashed (`trashed == true`), never both.

use serde::{Deserialize, Serialize};

/// Stable store-assigned identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Canonical persisted note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Row id assigned by the store on creation.
    pub id: NoteId,
    /// Free-form title. No length or uniqueness constraint.
    pub title: String,
    /// Free-form body text.
    pub content: String,
    /// Soft-delete flag. Trashed notes stay in storage until purged.
    pub trashed: bool,
}

/// Client-supplied note fields, without store-owned state.
///
/// Used by create/update paths so a caller can never smuggle an `id` or a
/// `trashed` transition through a plain field write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

impl Note {
    /// Marks this note as trashed.
    pub fn trash(&mut self) {
        self.trashed = true;
    }

    /// Clears the trash flag.
    pub fn restore(&mut self) {
        self.trashed = false;
    }

    /// Returns whether this note appears in the main (non-trash) view.
    pub fn is_active(&self) -> bool {
        !self.trashed
    }
}
