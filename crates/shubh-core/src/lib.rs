//! Shubh Core — shared domain abstractions.
//!
//! This crate defines the traits and types that the content and viewer
//! contexts depend on: time, commands, errors, and the interfaces of the
//! external persistence and profile collaborators. It contains no
//! infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod profile;
pub mod repository;
