//! Query handlers for the Invitation Viewer context.

use std::time::Duration;

use serde::Serialize;
use shubh_content::application::query_handlers::read_event_content;
use shubh_content::domain::display::{ContentDisplay, SharedSchedule, resolve_display};
use shubh_core::clock::Clock;
use shubh_core::error::DomainError;
use shubh_core::profile::{ProfileDirectory, ProfileRef};
use shubh_core::repository::ContentStore;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::deity::Deity;
use crate::domain::design::{DesignCatalog, DesignId, ThemeBundle};
use crate::domain::phase::{OPENING_DURATION, Phase};
use crate::domain::render::{RenderElement, render_plan};
use crate::domain::session::ViewerSession;

/// One event of the invitation, resolved for display.
#[derive(Debug, Serialize)]
pub struct EventView {
    /// Event identifier.
    pub event_id: Uuid,
    /// Resolved content; empty when nothing was saved.
    pub content: ContentDisplay,
}

/// Everything the public viewer needs to run a session.
#[derive(Debug, Serialize)]
pub struct InvitationView {
    /// The new session.
    pub session: ViewerSession,
    /// Resolved theme bundle.
    pub theme: ThemeBundle,
    /// Length of the opening phase.
    pub opening_duration_ms: u64,
    /// Profile slug.
    pub slug: String,
    /// Events in profile order.
    pub events: Vec<EventView>,
}

/// The phase and render plan at one instant of a session.
#[derive(Debug, Serialize)]
pub struct RenderSnapshot {
    /// Derived phase.
    pub phase: Phase,
    /// Elements to mount, in order.
    pub elements: Vec<RenderElement>,
    /// Time left before content shows.
    pub remaining_opening_ms: u64,
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Collaborators the invitation query reads from.
#[derive(Clone, Copy)]
pub struct ViewerSources<'a> {
    /// Theme catalog.
    pub designs: &'a DesignCatalog,
    /// Profile lookup.
    pub profiles: &'a dyn ProfileDirectory,
    /// Content records.
    pub store: &'a dyn ContentStore,
    /// Time source for the session start.
    pub clock: &'a dyn Clock,
}

/// Opens the invitation of `slug` under `design`.
///
/// The motif is `deity` when given, else the profile's preference, else
/// Ganesha. Events without saved content resolve to empty displays.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the design or the slug does not
/// resolve. Returns `DomainError::Infrastructure` if a collaborator fails.
#[instrument(skip(sources))]
pub async fn open_invitation(
    design: &str,
    slug: &str,
    deity: Option<Deity>,
    sources: ViewerSources<'_>,
) -> Result<InvitationView, DomainError> {
    let theme = sources
        .designs
        .resolve(design)
        .ok_or_else(|| DomainError::not_found("design", design))?
        .clone();
    let profile = find_profile(slug, sources).await?;
    build_view(theme, profile, deity, sources).await
}

/// Opens the invitation of `slug` under the profile's own design, or the
/// catalog default when the profile has none (or names an unknown one).
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the slug does not resolve.
/// Returns `DomainError::Infrastructure` if a collaborator fails.
#[instrument(skip(sources))]
pub async fn open_preferred_invitation(
    slug: &str,
    deity: Option<Deity>,
    sources: ViewerSources<'_>,
) -> Result<InvitationView, DomainError> {
    let profile = find_profile(slug, sources).await?;
    let theme = sources
        .designs
        .preferred(profile.design_id.as_deref())
        .clone();
    build_view(theme, profile, deity, sources).await
}

async fn find_profile(slug: &str, sources: ViewerSources<'_>) -> Result<ProfileRef, DomainError> {
    sources
        .profiles
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| DomainError::not_found("profile", slug))
}

async fn build_view(
    theme: ThemeBundle,
    profile: ProfileRef,
    deity: Option<Deity>,
    sources: ViewerSources<'_>,
) -> Result<InvitationView, DomainError> {
    let deity = deity.unwrap_or_else(|| Deity::from_preference(profile.deity_id.as_deref()));

    let mut events = Vec::with_capacity(profile.events.len());
    for event in &profile.events {
        let record = read_event_content(profile.profile_id, event.event_id, sources.store).await?;
        let schedule = SharedSchedule {
            main_date: profile.main_date.clone(),
            start_time: event.start_time.clone(),
        };
        events.push(EventView {
            event_id: event.event_id,
            content: resolve_display(&record, &schedule),
        });
    }

    let session = ViewerSession::start(theme.id.clone(), deity, sources.clock);
    info!(session_id = %session.session_id, design = %theme.id, %deity, "invitation opened");

    Ok(InvitationView {
        session,
        theme,
        opening_duration_ms: millis(OPENING_DURATION),
        slug: profile.slug,
        events,
    })
}

/// Derives the phase and render plan `elapsed` into a session.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if `design` is not in the catalog.
pub fn render_snapshot(
    designs: &DesignCatalog,
    design: &str,
    deity: Deity,
    elapsed: Duration,
) -> Result<RenderSnapshot, DomainError> {
    if designs.resolve(design).is_none() {
        return Err(DomainError::not_found("design", design));
    }
    let phase = Phase::at_elapsed(elapsed);
    Ok(RenderSnapshot {
        phase,
        elements: render_plan(phase, &DesignId::new(design), deity),
        remaining_opening_ms: millis(Phase::remaining_opening(elapsed)),
    })
}
