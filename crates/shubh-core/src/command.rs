//! Command abstractions.

use uuid::Uuid;

/// Trait implemented by every write-side request handled by a context.
///
/// Commands always target one invitation profile; the profile id is part of
/// the tracing fields emitted by the handlers.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted type name, e.g. `content.save_event_content`.
    fn command_type(&self) -> &'static str;

    /// Correlation ID to trace this command through the system.
    fn correlation_id(&self) -> Uuid;

    /// The invitation profile this command writes to.
    fn profile_id(&self) -> Uuid;
}
