//! Application layer for the Event Content context.

pub mod command_handlers;
pub mod query_handlers;
