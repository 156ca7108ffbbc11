//! Shared application state.

use std::sync::Arc;

use shubh_core::clock::Clock;
use shubh_core::profile::ProfileDirectory;
use shubh_core::repository::ContentStore;
use shubh_viewer::application::query_handlers::ViewerSources;
use shubh_viewer::domain::design::DesignCatalog;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Time source for content saves and viewer sessions.
    pub clock: Arc<dyn Clock>,
    /// Content record persistence.
    pub content_store: Arc<dyn ContentStore>,
    /// Slug-to-profile lookup.
    pub profiles: Arc<dyn ProfileDirectory>,
    /// Theme bundles by design id.
    pub designs: Arc<DesignCatalog>,
    /// Bearer token that unlocks the admin endpoints.
    pub admin_token: Arc<str>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        content_store: Arc<dyn ContentStore>,
        profiles: Arc<dyn ProfileDirectory>,
        designs: Arc<DesignCatalog>,
        admin_token: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            clock,
            content_store,
            profiles,
            designs,
            admin_token: admin_token.into(),
        }
    }

    /// Borrows the collaborators the viewer queries read from.
    #[must_use]
    pub fn viewer_sources(&self) -> ViewerSources<'_> {
        ViewerSources {
            designs: &self.designs,
            profiles: self.profiles.as_ref(),
            store: self.content_store.as_ref(),
            clock: self.clock.as_ref(),
        }
    }
}
