//! Domain layer for the Event Content context.

pub mod commands;
pub mod display;
pub mod editing;
pub mod event_type;
pub mod record;
pub mod schema;
