//! `PostgreSQL` implementation of the `ContentStore` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use shubh_core::error::DomainError;
use shubh_core::repository::{ContentStore, StoredContent};

use crate::infrastructure;

/// PostgreSQL-backed content store. Saves are whole-record upserts, so two
/// concurrent saves of the same event resolve as last-write-wins.
#[derive(Debug, Clone)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    /// Creates a new `PgContentStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn load_content(
        &self,
        profile_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<StoredContent>, DomainError> {
        let row: Option<(serde_json::Value, DateTime<Utc>)> = sqlx::query_as(
            r"
            SELECT payload, updated_at
            FROM event_content
            WHERE profile_id = $1 AND event_id = $2
            ",
        )
        .bind(profile_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(infrastructure)?;

        Ok(row.map(|(payload, updated_at)| StoredContent {
            profile_id,
            event_id,
            payload,
            updated_at,
        }))
    }

    async fn put_content(&self, content: &StoredContent) -> Result<(), DomainError> {
        sqlx::query(
            r"
            INSERT INTO event_content (profile_id, event_id, payload, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (profile_id, event_id)
            DO UPDATE SET payload = EXCLUDED.payload, updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(content.profile_id)
        .bind(content.event_id)
        .bind(&content.payload)
        .bind(content.updated_at)
        .execute(&self.pool)
        .await
        .map_err(infrastructure)?;

        debug!(
            profile_id = %content.profile_id,
            event_id = %content.event_id,
            "content record replaced"
        );
        Ok(())
    }
}
