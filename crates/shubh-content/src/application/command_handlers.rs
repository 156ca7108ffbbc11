//! Command handlers for the Event Content context.
//!
//! Handlers orchestrate the save handoff: serialize the organizer's record,
//! stamp it with the clock, and hand it to the content store.

use chrono::{DateTime, Utc};
use shubh_core::clock::Clock;
use shubh_core::command::Command;
use shubh_core::error::DomainError;
use shubh_core::repository::{ContentStore, StoredContent};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::commands::SaveEventContent;

/// Result of a successfully handled save.
#[derive(Debug)]
pub struct ContentCommandResult {
    /// Owning profile.
    pub profile_id: Uuid,
    /// The event whose record was replaced.
    pub event_id: Uuid,
    /// Timestamp written with the record.
    pub updated_at: DateTime<Utc>,
}

/// Handles the `SaveEventContent` command: replaces the stored record for
/// `(profile_id, event_id)` with the command's record.
///
/// No field-level validation happens here. Records with an unrecognized
/// `event_type` are stored as-is.
///
/// # Errors
///
/// Returns `DomainError` if the store rejects the write.
#[instrument(
    skip(command, clock, store),
    fields(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id,
        profile_id = %command.profile_id,
        event_id = %command.event_id,
    )
)]
pub async fn handle_save_event_content(
    command: &SaveEventContent,
    clock: &dyn Clock,
    store: &dyn ContentStore,
) -> Result<ContentCommandResult, DomainError> {
    let updated_at = clock.now();
    let stored = StoredContent {
        profile_id: command.profile_id(),
        event_id: command.event_id,
        payload: command.record.to_value(),
        updated_at,
    };

    if command.record.known_type().is_none() {
        debug!(
            event_type = command.record.event_type(),
            "storing record with unrecognized event type as-is"
        );
    }

    store.put_content(&stored).await?;

    Ok(ContentCommandResult {
        profile_id: command.profile_id,
        event_id: command.event_id,
        updated_at,
    })
}
