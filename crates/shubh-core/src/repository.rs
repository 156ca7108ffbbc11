//! Content store abstraction.
//!
//! Persistence of content records is an external collaborator. The core only
//! sees the serialized record, keyed by `(profile_id, event_id)`, and replaces
//! it wholesale on every save. Two organizers saving the same key race with
//! last-write-wins semantics.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Stored representation of one event's content record.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredContent {
    /// Owning invitation profile.
    pub profile_id: Uuid,
    /// The event within the profile.
    pub event_id: Uuid,
    /// Serialized content record (interchange shape).
    pub payload: serde_json::Value,
    /// When the record was last replaced.
    pub updated_at: DateTime<Utc>,
}

/// Repository trait for reading and replacing content records.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Load the record for an event, or `None` if it was never saved.
    async fn load_content(
        &self,
        profile_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<StoredContent>, DomainError>;

    /// Replace the record for `(content.profile_id, content.event_id)`.
    async fn put_content(&self, content: &StoredContent) -> Result<(), DomainError>;
}
