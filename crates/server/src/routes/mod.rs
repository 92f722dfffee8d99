//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Health checks, readiness, and metrics
//! - `users`: User lookup by id
//! - `notes`: Note create, list, read, update, delete
//! - `text`: String reversal
//! - `time`: Hour-of-day classification

pub mod health;
pub mod notes;
pub mod text;
pub mod time;
pub mod users;

use crate::error::{ServerError, ServerResult};

/// Greeting served at the root (GET /)
pub async fn hello() -> &'static str {
    "Hello World!"
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound("Not found".to_string())
}

/// Normalize an id path segment or fail with `400 Invalid id format`
pub(crate) fn require_id(raw: &str) -> ServerResult<i64> {
    classify::parse_id(raw).ok_or_else(|| {
        tracing::debug!(raw_id = %raw, "Rejected id path segment");
        ServerError::invalid_id()
    })
}
