//! Application layer for the Invitation Viewer context.

pub mod controller;
pub mod query_handlers;
