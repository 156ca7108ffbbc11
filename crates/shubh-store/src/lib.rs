//! PostgreSQL implementations of the Shubh collaborator traits.

pub mod pg_content_store;
pub mod pg_profile_directory;

use shubh_core::error::DomainError;

pub(crate) fn infrastructure(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}
