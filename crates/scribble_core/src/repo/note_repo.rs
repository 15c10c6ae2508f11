//! Note repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `notes` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `id` is store-assigned on create; callers cannot supply one.
//! - Every single-record operation reports `RepoError::NotFound` for an
//!   absent id; none silently succeeds.
//! - `update_note` never alters `trashed`; `set_trashed` never alters
//!   `title`/`content`.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::note::{Note, NoteDraft, NoteId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    trashed
FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Trash-state filter for listing notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteFilter {
    /// Every note regardless of trash state.
    All,
    /// Notes with `trashed = 0` (the main view).
    #[default]
    Active,
    /// Notes with `trashed = 1` (the trash view).
    Trashed,
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Inserts one note with a fresh store-assigned id and `trashed = 0`.
    fn create_note(&self, draft: &NoteDraft) -> RepoResult<NoteId>;
    /// Gets one note by id.
    fn get_note(&self, id: NoteId) -> RepoResult<Note>;
    /// Lists notes matching the trash-state filter, each exactly once.
    fn list_notes(&self, filter: NoteFilter) -> RepoResult<Vec<Note>>;
    /// Overwrites `title` and `content` in place; `trashed` is untouched.
    fn update_note(&self, id: NoteId, draft: &NoteDraft) -> RepoResult<()>;
    /// Flips the `trashed` flag only.
    fn set_trashed(&self, id: NoteId, trashed: bool) -> RepoResult<()>;
    /// Permanently removes the record.
    fn delete_note(&self, id: NoteId) -> RepoResult<()>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn create_note(&self, draft: &NoteDraft) -> RepoResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (title, content, trashed) VALUES (?1, ?2, 0);",
            params![draft.title.as_str(), draft.content.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Note> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => parse_note_row(row),
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn list_notes(&self, filter: NoteFilter) -> RepoResult<Vec<Note>> {
        let mut sql = String::from(NOTE_SELECT_SQL);
        match filter {
            NoteFilter::All => {}
            NoteFilter::Active => sql.push_str(" WHERE trashed = 0"),
            NoteFilter::Trashed => sql.push_str(" WHERE trashed = 1"),
        }
        // Insertion order; callers must not rely on it.
        sql.push_str(" ORDER BY id ASC;");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();

        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn update_note(&self, id: NoteId, draft: &NoteDraft) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE notes
             SET
                title = ?1,
                content = ?2
             WHERE id = ?3;",
            params![draft.title.as_str(), draft.content.as_str(), id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn set_trashed(&self, id: NoteId, trashed: bool) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE notes
             SET trashed = ?1
             WHERE id = ?2;",
            params![bool_to_int(trashed), id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let trashed = match row.get::<_, i64>("trashed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid trashed value `{other}` in notes.trashed"
            )));
        }
    };

    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        trashed,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
