//! The viewer phase controller.
//!
//! Owns the one-shot opening timer of a [`ViewerSession`]. Mounting renders
//! the current phase and, for the first mount of a session still in its
//! opening, spawns a task that sleeps for the rest of the opening and then
//! switches to content exactly once. Tearing any controller down (explicitly
//! or by dropping it) tears the session down: its timer never fires and later
//! mounts of the same session render nothing.

use std::sync::Arc;

use shubh_core::clock::Clock;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::lifecycle::Admission;
use crate::domain::phase::Phase;
use crate::domain::render::{RenderElement, render_plan};
use crate::domain::session::ViewerSession;

/// Receives every render the controller performs.
///
/// Renders run while the session's teardown lock is held; an observer must
/// not tear the session down from inside `on_render`.
pub trait PhaseObserver: Send + Sync {
    /// Called with the phase being entered and its render plan.
    fn on_render(&self, phase: Phase, elements: &[RenderElement]);
}

/// How the opening timer ended, from one controller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// The timer expired and the session moved to content.
    Fired,
    /// The session was torn down first, or before this mount.
    Cancelled,
    /// The session was already past its opening when mounted; no timer ran.
    AlreadyElapsed,
    /// An earlier mount of the same session owns the timer.
    AlreadyArmed,
}

/// Drives one session from opening to content.
#[derive(Debug)]
pub struct PhaseController {
    session: ViewerSession,
    phase: watch::Receiver<Phase>,
    timer: Option<JoinHandle<TimerOutcome>>,
    idle_outcome: TimerOutcome,
}

impl PhaseController {
    /// Mounts `session`: renders its current phase and, if the opening is
    /// still running and no earlier mount armed it, starts the timer for the
    /// remainder of it.
    ///
    /// The remainder is computed from the session's start time, so mounting
    /// a session again after a re-render does not restart the opening. A
    /// session that was torn down is not rendered at all.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn mount(
        session: ViewerSession,
        observer: Arc<dyn PhaseObserver>,
        clock: &dyn Clock,
    ) -> Self {
        let elapsed = clock.elapsed_since(session.started_at);
        let phase = Phase::at_elapsed(elapsed);
        let (tx, rx) = watch::channel(phase);

        let plan = render_plan(phase, &session.design, session.deity);
        let admission = session
            .lifecycle()
            .admit(phase == Phase::Opening, || observer.on_render(phase, &plan));

        let (timer, idle_outcome) = match admission {
            Admission::ArmTimer => {
                let remaining = Phase::remaining_opening(elapsed);
                debug!(
                    session_id = %session.session_id,
                    remaining_ms = u64::try_from(remaining.as_millis()).unwrap_or(u64::MAX),
                    "starting opening timer"
                );
                let task = tokio::spawn(run_opening_timer(session.clone(), remaining, tx, observer));
                (Some(task), TimerOutcome::Fired)
            }
            Admission::Rendered if phase == Phase::Content => (None, TimerOutcome::AlreadyElapsed),
            Admission::Rendered => {
                debug!(session_id = %session.session_id, "opening timer already armed");
                (None, TimerOutcome::AlreadyArmed)
            }
            Admission::Refused => {
                debug!(session_id = %session.session_id, "refusing to mount a torn-down session");
                (None, TimerOutcome::Cancelled)
            }
        };

        Self {
            session,
            phase: rx,
            timer,
            idle_outcome,
        }
    }

    /// The session this controller drives.
    #[must_use]
    pub fn session(&self) -> &ViewerSession {
        &self.session
    }

    /// The phase most recently entered.
    #[must_use]
    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    /// A receiver notified when the phase changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase.clone()
    }

    /// Tears the session down and cancels its opening timer. Safe to call any
    /// number of times, from any controller of the session.
    pub fn teardown(&self) {
        if self.session.lifecycle().tear_down() {
            debug!(session_id = %self.session.session_id, "tore down viewer session");
        }
    }

    /// Whether the session has been torn down.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.session.lifecycle().is_torn_down()
    }

    /// Waits for this controller's opening timer to finish, either by firing
    /// or by being cancelled. Controllers without a timer report why.
    pub async fn join(mut self) -> TimerOutcome {
        let Some(timer) = self.timer.take() else {
            return self.idle_outcome;
        };
        match timer.await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(session_id = %self.session.session_id, error = %err, "opening timer task failed");
                TimerOutcome::Cancelled
            }
        }
    }
}

impl Drop for PhaseController {
    fn drop(&mut self) {
        self.session.lifecycle().tear_down();
    }
}

async fn run_opening_timer(
    session: ViewerSession,
    remaining: std::time::Duration,
    tx: watch::Sender<Phase>,
    observer: Arc<dyn PhaseObserver>,
) -> TimerOutcome {
    let lifecycle = session.lifecycle();
    tokio::select! {
        biased;
        () = lifecycle.cancelled() => {
            debug!(session_id = %session.session_id, "opening timer cancelled");
            TimerOutcome::Cancelled
        }
        () = tokio::time::sleep(remaining) => {
            let fired = lifecycle.fire(|| {
                tx.send_replace(Phase::Content);
                observer.on_render(
                    Phase::Content,
                    &render_plan(Phase::Content, &session.design, session.deity),
                );
            });
            if fired {
                debug!(session_id = %session.session_id, "opening finished");
                TimerOutcome::Fired
            } else {
                TimerOutcome::Cancelled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use chrono::{TimeZone, Utc};
    use shubh_test_support::FixedClock;

    use super::*;
    use crate::domain::deity::Deity;
    use crate::domain::design::DesignId;
    use crate::domain::phase::OPENING_DURATION;

    #[derive(Default)]
    struct RecordingObserver {
        renders: Mutex<Vec<(Phase, Vec<RenderElement>)>>,
    }

    impl RecordingObserver {
        fn phases(&self) -> Vec<Phase> {
            self.renders.lock().unwrap().iter().map(|(p, _)| *p).collect()
        }
    }

    impl PhaseObserver for RecordingObserver {
        fn on_render(&self, phase: Phase, elements: &[RenderElement]) {
            self.renders.lock().unwrap().push((phase, elements.to_vec()));
        }
    }

    fn fresh_session(clock: &FixedClock) -> ViewerSession {
        ViewerSession::start(DesignId::new("floral"), Deity::Shiva, clock)
    }

    fn t0() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_renders_opening_then_content_after_three_seconds() {
        // Arrange
        let clock = FixedClock(t0());
        let observer = Arc::new(RecordingObserver::default());
        let started = tokio::time::Instant::now();

        // Act
        let controller = PhaseController::mount(fresh_session(&clock), observer.clone(), &clock);
        let mut phase_rx = controller.subscribe();
        assert_eq!(controller.phase(), Phase::Opening);
        phase_rx.changed().await.unwrap();

        // Assert
        assert!(started.elapsed() >= OPENING_DURATION);
        assert_eq!(controller.phase(), Phase::Content);
        assert_eq!(observer.phases(), [Phase::Opening, Phase::Content]);

        let renders = observer.renders.lock().unwrap();
        assert_eq!(renders[0].1.len(), 1);
        assert_eq!(
            renders[1].1,
            [
                RenderElement::ParticleEffects {
                    design: DesignId::new("floral")
                },
                RenderElement::InvitationContent {
                    design: DesignId::new("floral"),
                    deity: Deity::Shiva,
                },
                RenderElement::BackNavigation { target: "/" },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_still_opening_one_millisecond_before_expiry() {
        let clock = FixedClock(t0());
        let observer = Arc::new(RecordingObserver::default());
        let controller = PhaseController::mount(fresh_session(&clock), observer.clone(), &clock);

        tokio::time::sleep(Duration::from_millis(2999)).await;

        assert_eq!(controller.phase(), Phase::Opening);
        assert_eq!(observer.phases(), [Phase::Opening]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_before_expiry_prevents_any_later_render() {
        // Arrange
        let clock = FixedClock(t0());
        let observer = Arc::new(RecordingObserver::default());
        let controller = PhaseController::mount(fresh_session(&clock), observer.clone(), &clock);
        let phase_rx = controller.subscribe();

        // Act
        tokio::time::sleep(Duration::from_millis(1000)).await;
        controller.teardown();
        controller.teardown();
        tokio::time::sleep(Duration::from_secs(10)).await;

        // Assert
        assert!(controller.is_torn_down());
        assert_eq!(*phase_rx.borrow(), Phase::Opening);
        assert_eq!(observer.phases(), [Phase::Opening]);
        assert_eq!(controller.join().await, TimerOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_the_controller_cancels_the_timer() {
        let clock = FixedClock(t0());
        let observer = Arc::new(RecordingObserver::default());
        let controller = PhaseController::mount(fresh_session(&clock), observer.clone(), &clock);
        let phase_rx = controller.subscribe();

        drop(controller);
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert_eq!(*phase_rx.borrow(), Phase::Opening);
        assert_eq!(observer.phases(), [Phase::Opening]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_once_and_join_reports_it() {
        let clock = FixedClock(t0());
        let observer = Arc::new(RecordingObserver::default());
        let controller = PhaseController::mount(fresh_session(&clock), observer.clone(), &clock);

        assert_eq!(controller.join().await, TimerOutcome::Fired);
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert_eq!(observer.phases(), [Phase::Opening, Phase::Content]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_continues_the_original_opening() {
        // Arrange
        let session = fresh_session(&FixedClock(t0()));
        let later = FixedClock(t0() + chrono::Duration::milliseconds(2000));
        let observer = Arc::new(RecordingObserver::default());
        let started = tokio::time::Instant::now();

        // Act
        let controller = PhaseController::mount(session, observer.clone(), &later);
        let mut phase_rx = controller.subscribe();
        phase_rx.changed().await.unwrap();

        // Assert
        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert!(started.elapsed() < OPENING_DURATION);
        assert_eq!(observer.phases(), [Phase::Opening, Phase::Content]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mounting_an_elapsed_session_renders_content_without_a_timer() {
        let session = fresh_session(&FixedClock(t0()));
        let later = FixedClock(t0() + chrono::Duration::seconds(5));
        let observer = Arc::new(RecordingObserver::default());

        let controller = PhaseController::mount(session, observer.clone(), &later);

        assert_eq!(controller.phase(), Phase::Content);
        assert_eq!(observer.phases(), [Phase::Content]);
        assert_eq!(controller.join().await, TimerOutcome::AlreadyElapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remounting_a_torn_down_session_renders_nothing() {
        // Arrange
        let clock = FixedClock(t0());
        let session = fresh_session(&clock);
        let observer = Arc::new(RecordingObserver::default());
        let first = PhaseController::mount(session.clone(), observer.clone(), &clock);
        first.teardown();

        // Act
        let second = PhaseController::mount(session.clone(), observer.clone(), &clock);
        let third = PhaseController::mount(session, observer.clone(), &clock);
        tokio::time::sleep(Duration::from_secs(5)).await;

        // Assert
        assert!(second.is_torn_down());
        assert_eq!(observer.phases(), [Phase::Opening]);
        assert_eq!(second.join().await, TimerOutcome::Cancelled);
        assert_eq!(third.join().await, TimerOutcome::Cancelled);
        assert_eq!(first.join().await, TimerOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_live_mounts_share_a_single_timer() {
        // Arrange
        let clock = FixedClock(t0());
        let session = fresh_session(&clock);
        let observer = Arc::new(RecordingObserver::default());

        // Act
        let first = PhaseController::mount(session.clone(), observer.clone(), &clock);
        let second = PhaseController::mount(session, observer.clone(), &clock);
        tokio::time::sleep(Duration::from_secs(5)).await;

        // Assert
        assert_eq!(
            observer.phases(),
            [Phase::Opening, Phase::Opening, Phase::Content]
        );
        assert_eq!(second.join().await, TimerOutcome::AlreadyArmed);
        assert_eq!(first.join().await, TimerOutcome::Fired);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_through_a_later_mount_cancels_the_armed_timer() {
        let clock = FixedClock(t0());
        let session = fresh_session(&clock);
        let observer = Arc::new(RecordingObserver::default());
        let owner = PhaseController::mount(session.clone(), observer.clone(), &clock);
        let rerender = PhaseController::mount(session, observer.clone(), &clock);

        rerender.teardown();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(owner.is_torn_down());
        assert_eq!(observer.phases(), [Phase::Opening, Phase::Opening]);
        assert_eq!(owner.join().await, TimerOutcome::Cancelled);
    }
}
