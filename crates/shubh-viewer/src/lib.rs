//! Shubh Invitations — Invitation Viewer context.
//!
//! Drives the public invitation page: a timed opening reveal followed by the
//! full content, themed by a design bundle and a deity motif.

pub mod application;
pub mod domain;
