//! Test profile directory — a fixed list of profiles.

use async_trait::async_trait;
use shubh_core::error::DomainError;
use shubh_core::profile::{ProfileDirectory, ProfileRef};

/// A profile directory that resolves slugs against a fixed list.
#[derive(Debug, Default)]
pub struct StaticProfileDirectory {
    profiles: Vec<ProfileRef>,
}

impl StaticProfileDirectory {
    /// Create a directory containing `profiles`.
    #[must_use]
    pub fn new(profiles: Vec<ProfileRef>) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl ProfileDirectory for StaticProfileDirectory {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ProfileRef>, DomainError> {
        Ok(self.profiles.iter().find(|p| p.slug == slug).cloned())
    }
}
