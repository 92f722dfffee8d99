use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::types::{Note, NoteInput, User};

/// Read access to users.
pub trait UserRepository: Send + Sync {
    /// Look up a user by id. `Ok(None)` means no such user.
    fn find_user_by_id(&self, id: i64) -> StoreResult<Option<User>>;
    /// Release backend resources. Called once during shutdown.
    fn close(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Create, read, update and delete access to notes.
pub trait NotesRepository: Send + Sync {
    /// Validate and persist a new note.
    fn create_note(&self, input: NoteInput) -> StoreResult<Note>;
    /// All notes in ascending id order.
    fn get_all_notes(&self) -> StoreResult<Vec<Note>>;
    fn get_note(&self, id: i64) -> StoreResult<Option<Note>>;
    /// Replace title and content. Returns `Ok(None)` for an unknown id
    /// without validating `input`.
    fn update_note(&self, id: i64, input: NoteInput) -> StoreResult<Option<Note>>;
    /// Returns whether a note was removed.
    fn delete_note(&self, id: i64) -> StoreResult<bool>;
    fn close(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Users held in a `RwLock`ed map, seeded at construction.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<i64, User>>,
}

impl InMemoryUserRepository {
    pub fn new(seed: impl IntoIterator<Item = User>) -> Self {
        let users = seed.into_iter().map(|user| (user.id, user)).collect();
        Self {
            users: RwLock::new(users),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new(crate::types::default_users())
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_user_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        let guard = self
            .users
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.get(&id).cloned())
    }
}

struct NotesTable {
    next_id: i64,
    rows: BTreeMap<i64, Note>,
}

/// Notes held in a `RwLock`ed ordered map with auto-incrementing ids.
pub struct InMemoryNotesRepository {
    table: RwLock<NotesTable>,
}

impl InMemoryNotesRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(NotesTable {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryNotesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesRepository for InMemoryNotesRepository {
    fn create_note(&self, input: NoteInput) -> StoreResult<Note> {
        let title = input.validated_title()?.to_string();
        let mut guard = self
            .table
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;

        let id = guard.next_id;
        guard.next_id += 1;

        let now = Utc::now();
        let note = Note {
            id,
            title,
            content: input.content,
            created_at: now,
            updated_at: now,
        };
        guard.rows.insert(id, note.clone());
        info!(note_id = id, "note_created");
        Ok(note)
    }

    fn get_all_notes(&self) -> StoreResult<Vec<Note>> {
        let guard = self
            .table
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.rows.values().cloned().collect())
    }

    fn get_note(&self, id: i64) -> StoreResult<Option<Note>> {
        let guard = self
            .table
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.rows.get(&id).cloned())
    }

    fn update_note(&self, id: i64, input: NoteInput) -> StoreResult<Option<Note>> {
        let mut guard = self
            .table
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;

        let Some(note) = guard.rows.get_mut(&id) else {
            debug!(note_id = id, "note_update_missing");
            return Ok(None);
        };

        let title = input.validated_title()?.to_string();
        note.title = title;
        note.content = input.content;
        note.updated_at = Utc::now();
        info!(note_id = id, "note_updated");
        Ok(Some(note.clone()))
    }

    fn delete_note(&self, id: i64) -> StoreResult<bool> {
        let removed = self
            .table
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?
            .rows
            .remove(&id)
            .is_some();
        if removed {
            info!(note_id = id, "note_deleted");
        }
        Ok(removed)
    }
}
