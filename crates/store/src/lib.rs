//! Repository layer for the notes API.
//!
//! HTTP handlers talk to the [`UserRepository`] and [`NotesRepository`] traits
//! only; [`RepositoryFactory`] picks the concrete backend from [`StoreConfig`].
//! Tests swap in their own trait objects without touching the handlers.
//!
//! ## Example
//!
//! ```
//! use store::{NoteInput, RepositoryFactory, StoreConfig};
//!
//! let repos = RepositoryFactory::create(&StoreConfig::default());
//!
//! let note = repos
//!     .notes
//!     .create_note(NoteInput::new("Groceries", Some("milk, eggs".into())))
//!     .unwrap();
//! assert_eq!(note.id, 1);
//!
//! let bob = repos.users.find_user_by_id(2).unwrap().unwrap();
//! assert_eq!(bob.name, "Bob");
//! ```

mod backend;
mod error;
mod factory;
mod types;

pub use crate::backend::{
    InMemoryNotesRepository, InMemoryUserRepository, NotesRepository, UserRepository,
};
pub use crate::error::{StoreError, StoreResult};
pub use crate::factory::{BackendKind, Repositories, RepositoryFactory, StoreConfig};
pub use crate::types::{default_users, Note, NoteInput, User, MAX_TITLE_CHARS};
