//! Shubh Invitations — Event Content context.
//!
//! Owns the per-event-type content schema: which fields each ceremony
//! recognizes, how an organizer's edits are folded into a content record, and
//! how a saved record is resolved for display with its shared fallbacks.

pub mod application;
pub mod domain;
