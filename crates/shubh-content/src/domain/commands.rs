//! Commands for the Event Content context.

use shubh_core::command::Command;
use uuid::Uuid;

use super::record::ContentRecord;

/// Command to replace the stored content record of one event.
///
/// The record is written whole; merging of individual edits happens in the
/// organizer's [`EditSession`](super::editing::EditSession) before this
/// command is built.
#[derive(Debug, Clone)]
pub struct SaveEventContent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Owning profile.
    pub profile_id: Uuid,
    /// Target event.
    pub event_id: Uuid,
    /// The complete record to store.
    pub record: ContentRecord,
}

impl Command for SaveEventContent {
    fn command_type(&self) -> &'static str {
        "content.save_event_content"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn profile_id(&self) -> Uuid {
        self.profile_id
    }
}
