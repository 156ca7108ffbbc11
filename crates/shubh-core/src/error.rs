//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A profile, design, or content record could not be resolved.
    #[error("{kind} not found: {key}")]
    NotFound {
        /// What was being looked up (`profile`, `design`, `content`).
        kind: &'static str,
        /// The identifier or slug that failed to resolve.
        key: String,
    },

    /// The caller lacks the admin capability required for a write path.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Malformed input at the boundary (never raised for field values).
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Shorthand for [`DomainError::NotFound`].
    pub fn not_found(kind: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }
}
