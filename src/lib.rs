//! Workspace umbrella crate for the notes API.
//!
//! Re-exports the id and hour classifiers from `classify`, the repositories
//! from `store`, and hosts the small text helpers used by the HTTP layer.
//!
//! ```
//! use notes_api::{parse_id, what_part_of_day, PartOfDay};
//!
//! assert_eq!(parse_id("2.0"), Some(2));
//! assert_eq!(what_part_of_day(18), PartOfDay::Night);
//! ```

mod text;

pub use classify::{
    is_valid_id, parse_id, what_part_of_day, ConfigError, HourBounds, HourCandidate,
    HourClassifier, IdCandidate, PartOfDay, DAYLIGHT_END, DAYLIGHT_START, MAX_HOUR, MIN_HOUR,
};
pub use store::{
    default_users, BackendKind, InMemoryNotesRepository, InMemoryUserRepository, Note, NoteInput,
    NotesRepository, Repositories, RepositoryFactory, StoreConfig, StoreError, StoreResult, User,
    UserRepository,
};

pub use crate::text::reverse_string;
