//! Shared test mocks and utilities for the Shubh invitation platform.

mod clock;
mod profiles;
mod store;

pub use clock::{FixedClock, ManualClock};
pub use profiles::StaticProfileDirectory;
pub use store::{FailingContentStore, InMemoryContentStore};
