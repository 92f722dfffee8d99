//! Small-domain validators for the notes API.
//!
//! Two independent classifiers live here:
//!
//! - **Ids** ([`is_valid_id`], [`parse_id`]) decide whether a path segment is a
//!   usable integer identifier and normalize it to an `i64`.
//! - **Hours** ([`what_part_of_day`], [`HourClassifier`]) label an hour value as
//!   [`PartOfDay::Daylight`], [`PartOfDay::Night`] or
//!   [`PartOfDay::Undetermined`].
//!
//! Both are total and deterministic. Invalid input is a normal return value,
//! never an error, so callers decide how to surface it (the HTTP layer maps an
//! invalid id to `400 Bad Request`).
//!
//! ## Example
//!
//! ```
//! use classify::{is_valid_id, parse_id, what_part_of_day, PartOfDay};
//!
//! assert!(is_valid_id("2.0"));
//! assert_eq!(parse_id("2.0"), Some(2));
//! assert!(!is_valid_id("1.5"));
//!
//! assert_eq!(what_part_of_day(12), PartOfDay::Daylight);
//! assert_eq!(what_part_of_day("7"), PartOfDay::Undetermined);
//! ```

mod config;
mod hour;
mod id;

pub use crate::config::{
    ConfigError, HourBounds, DAYLIGHT_END, DAYLIGHT_START, MAX_HOUR, MIN_HOUR,
};
pub use crate::hour::{what_part_of_day, HourCandidate, HourClassifier, PartOfDay};
pub use crate::id::{is_valid_id, parse_id, IdCandidate};
