use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Longest title a note may carry, in characters.
pub const MAX_TITLE_CHARS: usize = 255;

/// A user known to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Users available when no seed list is configured.
pub fn default_users() -> Vec<User> {
    vec![
        User::new(1, "Alice"),
        User::new(2, "Bob"),
        User::new(3, "Charlie"),
    ]
}

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for creating or replacing a note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, content: Option<String>) -> Self {
        Self {
            title: Some(title.into()),
            content,
        }
    }

    /// Returns the title if present, non-blank and short enough.
    pub fn validated_title(&self) -> StoreResult<&str> {
        let Some(title) = self.title.as_deref() else {
            return Err(StoreError::validation("Title is required"));
        };
        if title.trim().is_empty() {
            return Err(StoreError::validation("Title cannot be empty"));
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(StoreError::validation(format!(
                "Title must be at most {MAX_TITLE_CHARS} characters"
            )));
        }
        Ok(title)
    }
}
