//! The per-visit viewer session.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use shubh_core::clock::Clock;
use uuid::Uuid;

use super::deity::Deity;
use super::design::DesignId;
use super::lifecycle::SessionLifecycle;
use super::phase::Phase;
use super::render::{RenderElement, render_plan};

/// Ephemeral state of one invitation page visit. Never persisted.
///
/// The session holds only its start time; the phase is always derived from
/// `now - started_at`, so re-renders that do not reset the session agree on
/// the phase without any mutable counter. Clones share one
/// [`SessionLifecycle`], so tearing down any handle tears down them all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerSession {
    /// Session identifier.
    pub session_id: Uuid,
    /// Theme from the route.
    pub design: DesignId,
    /// Motif; defaults to Ganesha.
    pub deity: Deity,
    /// When the opening phase began.
    pub started_at: DateTime<Utc>,
    #[serde(skip)]
    lifecycle: SessionLifecycle,
}

impl ViewerSession {
    /// Starts a session in the opening phase at `clock.now()`.
    #[must_use]
    pub fn start(design: DesignId, deity: Deity, clock: &dyn Clock) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            design,
            deity,
            started_at: clock.now(),
            lifecycle: SessionLifecycle::default(),
        }
    }

    /// Teardown state shared by every clone of this session.
    #[must_use]
    pub fn lifecycle(&self) -> &SessionLifecycle {
        &self.lifecycle
    }

    /// Time since the session started; zero for instants before the start.
    #[must_use]
    pub fn elapsed_at(&self, now: DateTime<Utc>) -> Duration {
        (now - self.started_at).to_std().unwrap_or(Duration::ZERO)
    }

    /// The phase at `now`.
    #[must_use]
    pub fn phase_at(&self, now: DateTime<Utc>) -> Phase {
        Phase::at_elapsed(self.elapsed_at(now))
    }

    /// The render plan at `now`.
    #[must_use]
    pub fn render_at(&self, now: DateTime<Utc>) -> Vec<RenderElement> {
        render_plan(self.phase_at(now), &self.design, self.deity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shubh_test_support::{FixedClock, ManualClock};

    #[test]
    fn test_floral_shiva_session_switches_at_three_seconds() {
        // Arrange
        let t0 = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let clock = ManualClock::new(t0);
        let session = ViewerSession::start(DesignId::new("floral"), Deity::Shiva, &clock);

        // Act
        clock.advance_millis(2999);
        let before = session.render_at(clock.now());
        clock.advance_millis(1);
        let after = session.render_at(clock.now());

        // Assert
        assert_eq!(session.phase_at(t0 + chrono::Duration::milliseconds(2999)), Phase::Opening);
        assert_eq!(
            before,
            [RenderElement::OpeningReveal {
                design: DesignId::new("floral"),
                deity: Deity::Shiva,
            }]
        );
        assert_eq!(session.phase_at(clock.now()), Phase::Content);
        assert_eq!(
            after,
            [
                RenderElement::ParticleEffects {
                    design: DesignId::new("floral"),
                },
                RenderElement::InvitationContent {
                    design: DesignId::new("floral"),
                    deity: Deity::Shiva,
                },
                RenderElement::BackNavigation { target: "/" },
            ]
        );
    }

    #[test]
    fn test_phase_never_returns_to_opening() {
        let t0 = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let session = ViewerSession::start(DesignId::new("royal_classic"), Deity::default(), &FixedClock(t0));

        let phases: Vec<_> = (0..10)
            .map(|s| session.phase_at(t0 + chrono::Duration::seconds(s)))
            .collect();

        let first_content = phases.iter().position(|p| *p == Phase::Content).unwrap();
        assert!(phases[first_content..].iter().all(|p| *p == Phase::Content));
    }

    #[test]
    fn test_instants_before_start_are_opening() {
        let t0 = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let session = ViewerSession::start(DesignId::new("floral"), Deity::None, &FixedClock(t0));

        assert_eq!(session.phase_at(t0 - chrono::Duration::seconds(10)), Phase::Opening);
    }
}
