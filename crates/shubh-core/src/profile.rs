//! Profile directory abstraction.
//!
//! Profiles (couples, their events, their chosen theme) are owned by the admin
//! dashboard. The invitation core resolves them by public slug and reads the
//! handful of fields it needs for display.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainError;

/// One event listed on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileEvent {
    /// Event identifier; content records are keyed by it.
    pub event_id: Uuid,
    /// Event-level start time, used as the display fallback for
    /// per-type time fields.
    pub start_time: Option<String>,
}

/// The subset of an invitation profile the viewer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRef {
    /// Profile identifier.
    pub profile_id: Uuid,
    /// Public slug used in invitation links.
    pub slug: String,
    /// Design chosen by the organizer, if any.
    pub design_id: Option<String>,
    /// Deity motif chosen by the organizer, if any.
    pub deity_id: Option<String>,
    /// Invitation-level date, the display fallback for date fields.
    pub main_date: Option<String>,
    /// Events in display order.
    pub events: Vec<ProfileEvent>,
}

/// Resolves public slugs to zero-or-one profile.
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// Look a profile up by slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ProfileRef>, DomainError>;
}
