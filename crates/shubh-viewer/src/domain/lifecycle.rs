//! Teardown state shared by every handle on one viewer session.
//!
//! A session can be mounted more than once (a re-render hands the same
//! session to a new controller). The lifecycle makes sure that, across all of
//! those mounts, at most one opening timer is ever armed and nothing renders
//! once the session has been torn down.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;

/// What a mount is allowed to do with its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The render ran and this mount owns the session's opening timer.
    ArmTimer,
    /// The render ran; no timer is needed, or another mount already owns it.
    Rendered,
    /// The session was torn down; nothing ran.
    Refused,
}

#[derive(Debug, Default)]
struct LifecycleState {
    timer_armed: bool,
}

/// Shared teardown flag and timer ownership of one session.
///
/// Cancellation is only ever flipped while the state lock is held, and every
/// render goes through the same lock, so a render either completes before a
/// teardown or does not happen at all.
#[derive(Debug, Clone, Default)]
pub struct SessionLifecycle {
    cancel: CancellationToken,
    state: Arc<Mutex<LifecycleState>>,
}

impl SessionLifecycle {
    fn lock(&self) -> MutexGuard<'_, LifecycleState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `render` for a new mount unless the session is torn down.
    ///
    /// Grants the opening timer to the first mount that asks for it.
    pub fn admit(&self, wants_timer: bool, render: impl FnOnce()) -> Admission {
        let mut state = self.lock();
        if self.cancel.is_cancelled() {
            return Admission::Refused;
        }
        render();
        if wants_timer && !state.timer_armed {
            state.timer_armed = true;
            Admission::ArmTimer
        } else {
            Admission::Rendered
        }
    }

    /// Runs the timer's `render` unless the session is torn down. Returns
    /// whether it ran.
    pub fn fire(&self, render: impl FnOnce()) -> bool {
        let _state = self.lock();
        if self.cancel.is_cancelled() {
            return false;
        }
        render();
        true
    }

    /// Tears the session down. Returns `true` only for the first call.
    ///
    /// Blocks while a render is in progress.
    pub fn tear_down(&self) -> bool {
        let _state = self.lock();
        let first = !self.cancel.is_cancelled();
        self.cancel.cancel();
        first
    }

    /// Whether [`tear_down`](Self::tear_down) has run.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Resolves once the session is torn down.
    pub async fn cancelled(&self) {
        self.cancel.cancelled().await;
    }
}

impl PartialEq for SessionLifecycle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Eq for SessionLifecycle {}
