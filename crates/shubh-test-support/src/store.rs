//! Test stores — mock `ContentStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use shubh_core::error::DomainError;
use shubh_core::repository::{ContentStore, StoredContent};
use uuid::Uuid;

/// A content store backed by a `HashMap` that also records every
/// `put_content` call in order.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    records: Mutex<HashMap<(Uuid, Uuid), StoredContent>>,
    puts: Mutex<Vec<StoredContent>>,
}

impl InMemoryContentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with `records`. Seeding is not recorded as
    /// a put.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = StoredContent>) -> Self {
        let store = Self::new();
        {
            let mut map = store.records.lock().unwrap();
            for record in records {
                map.insert((record.profile_id, record.event_id), record);
            }
        }
        store
    }

    /// Returns a snapshot of every record passed to `put_content`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn puts(&self) -> Vec<StoredContent> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn load_content(
        &self,
        profile_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<StoredContent>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(&(profile_id, event_id))
            .cloned())
    }

    async fn put_content(&self, content: &StoredContent) -> Result<(), DomainError> {
        self.records
            .lock()
            .unwrap()
            .insert((content.profile_id, content.event_id), content.clone());
        self.puts.lock().unwrap().push(content.clone());
        Ok(())
    }
}

/// A content store that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingContentStore;

#[async_trait]
impl ContentStore for FailingContentStore {
    async fn load_content(
        &self,
        _profile_id: Uuid,
        _event_id: Uuid,
    ) -> Result<Option<StoredContent>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn put_content(&self, _content: &StoredContent) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
