//! Query handlers for the Event Content context.
//!
//! Read paths for the admin editor and the public viewer. The viewer never
//! sees an error for a missing record; it gets an empty one instead.

use serde::Serialize;
use shubh_core::error::DomainError;
use shubh_core::repository::{ContentStore, StoredContent};
use tracing::warn;
use uuid::Uuid;

use crate::domain::editing::{EditSession, EditorForm};
use crate::domain::event_type::EventType;
use crate::domain::record::ContentRecord;
use crate::domain::schema::{FieldSchema, schema_for};

/// Read-only view of one event type's schema.
#[derive(Debug, Serialize)]
pub struct SchemaView {
    /// The requested type tag.
    pub event_type: String,
    /// Section heading; `None` for unrecognized types.
    pub section_title: Option<&'static str>,
    /// Editable fields; empty for unrecognized types.
    pub fields: &'static [FieldSchema],
}

/// Describes the editable fields of `event_type`. Never fails.
#[must_use]
pub fn describe_schema(event_type: &str) -> SchemaView {
    let schema = schema_for(event_type);
    SchemaView {
        event_type: event_type.to_owned(),
        section_title: schema.map(|s| s.section_title),
        fields: schema.map(|s| s.fields).unwrap_or_default(),
    }
}

/// Every recognized event type tag.
#[must_use]
pub fn list_event_types() -> Vec<&'static str> {
    EventType::ALL.iter().map(|t| t.as_str()).collect()
}

fn decode(stored: StoredContent) -> Result<ContentRecord, DomainError> {
    ContentRecord::from_value(stored.payload).map_err(|e| {
        DomainError::Infrastructure(format!("content record deserialization failed: {e}"))
    })
}

/// Retrieves the stored record of an event for editing.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the event has no saved record.
/// Returns `DomainError::Infrastructure` if loading or decoding fails.
pub async fn get_event_content(
    profile_id: Uuid,
    event_id: Uuid,
    store: &dyn ContentStore,
) -> Result<ContentRecord, DomainError> {
    let stored = store
        .load_content(profile_id, event_id)
        .await?
        .ok_or_else(|| DomainError::not_found("content", event_id))?;
    decode(stored)
}

/// Retrieves the editor form of an event's saved record.
///
/// # Errors
///
/// Same as [`get_event_content`].
pub async fn get_editor_form(
    profile_id: Uuid,
    event_id: Uuid,
    store: &dyn ContentStore,
) -> Result<EditorForm, DomainError> {
    let record = get_event_content(profile_id, event_id, store).await?;
    Ok(EditSession::open(record).form())
}

/// Retrieves an event's record for the public viewer.
///
/// A missing record, or one that no longer decodes, yields an empty record so
/// the viewer renders an empty section instead of failing the page.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` only if the store itself fails.
pub async fn read_event_content(
    profile_id: Uuid,
    event_id: Uuid,
    store: &dyn ContentStore,
) -> Result<ContentRecord, DomainError> {
    let Some(stored) = store.load_content(profile_id, event_id).await? else {
        return Ok(ContentRecord::default());
    };
    match decode(stored) {
        Ok(record) => Ok(record),
        Err(err) => {
            warn!(%profile_id, %event_id, error = %err, "rendering undecodable record as empty");
            Ok(ContentRecord::default())
        }
    }
}
