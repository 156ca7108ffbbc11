//! Route modules organized by context.

pub mod content;
pub mod health;
pub mod invite;
pub mod schema;
pub mod viewer;
