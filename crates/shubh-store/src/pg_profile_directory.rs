//! `PostgreSQL` implementation of the `ProfileDirectory` trait.
//!
//! The profile tables are owned by the admin dashboard; this module only
//! reads them.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use shubh_core::error::DomainError;
use shubh_core::profile::{ProfileDirectory, ProfileEvent, ProfileRef};

use crate::infrastructure;

type ProfileRow = (Uuid, String, Option<String>, Option<String>, Option<String>);

/// PostgreSQL-backed profile lookup.
#[derive(Debug, Clone)]
pub struct PgProfileDirectory {
    pool: PgPool,
}

impl PgProfileDirectory {
    /// Creates a new `PgProfileDirectory`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileDirectory for PgProfileDirectory {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ProfileRef>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r"
            SELECT profile_id, slug, design_id, deity_id, main_date
            FROM invitation_profiles
            WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(infrastructure)?;

        let Some((profile_id, slug, design_id, deity_id, main_date)) = row else {
            return Ok(None);
        };

        let events: Vec<(Uuid, Option<String>)> = sqlx::query_as(
            r"
            SELECT event_id, start_time
            FROM profile_events
            WHERE profile_id = $1
            ORDER BY position, event_id
            ",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await
        .map_err(infrastructure)?;

        Ok(Some(ProfileRef {
            profile_id,
            slug,
            design_id,
            deity_id,
            main_date,
            events: events
                .into_iter()
                .map(|(event_id, start_time)| ProfileEvent {
                    event_id,
                    start_time,
                })
                .collect(),
        }))
    }
}
