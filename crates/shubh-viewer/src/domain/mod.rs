//! Domain layer for the Invitation Viewer context.

pub mod deity;
pub mod design;
pub mod lifecycle;
pub mod phase;
pub mod render;
pub mod session;
