//! Error types produced by the store crate.
//!
//! | Error | Category | HTTP |
//! |-------|----------|------|
//! | [`Validation`](StoreError::Validation) | Rejected input (e.g. empty title) | 400 |
//! | [`Backend`](StoreError::Backend) | Storage failure (e.g. poisoned lock) | 500 |
//!
//! ```rust
//! use store::StoreError;
//!
//! let err = StoreError::validation("Title is required");
//! assert_eq!(err.to_string(), "Title is required");
//! assert_eq!(err.http_status_code(), 400);
//! ```
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by repositories.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// Input rejected before it reached storage. The message is client-facing.
    #[error("{0}")]
    Validation(String),

    /// The backend could not complete the operation.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        StoreError::Validation(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        StoreError::Backend(msg.into())
    }

    /// True if the caller supplied bad input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    /// Suggested HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            StoreError::Validation(_) => 400,
            StoreError::Backend(_) => 500,
        }
    }
}
