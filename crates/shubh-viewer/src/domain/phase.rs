//! Viewer phases and their derivation from elapsed time.

use std::time::Duration;

use serde::Serialize;

/// How long the opening reveal blocks content rendering.
pub const OPENING_DURATION: Duration = Duration::from_millis(3000);

/// The viewer's current display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Timed opening reveal; content is not rendered.
    Opening,
    /// Full invitation content with ambient effects.
    Content,
}

impl Phase {
    /// Derives the phase of a session `elapsed` after it started.
    ///
    /// Pure in `elapsed`: `Opening` strictly before [`OPENING_DURATION`],
    /// `Content` from that instant on.
    #[must_use]
    pub fn at_elapsed(elapsed: Duration) -> Self {
        if elapsed < OPENING_DURATION {
            Phase::Opening
        } else {
            Phase::Content
        }
    }

    /// Time left in the opening phase, zero once content is showing.
    #[must_use]
    pub fn remaining_opening(elapsed: Duration) -> Duration {
        OPENING_DURATION.saturating_sub(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_boundary_is_exactly_three_seconds() {
        assert_eq!(Phase::at_elapsed(Duration::ZERO), Phase::Opening);
        assert_eq!(Phase::at_elapsed(Duration::from_millis(2999)), Phase::Opening);
        assert_eq!(Phase::at_elapsed(Duration::from_millis(3000)), Phase::Content);
        assert_eq!(Phase::at_elapsed(Duration::from_secs(3600)), Phase::Content);
    }

    #[test]
    fn test_phase_is_stable_under_re_evaluation() {
        for millis in [0, 1500, 2999, 3000, 3001, 60_000] {
            let elapsed = Duration::from_millis(millis);
            let first = Phase::at_elapsed(elapsed);
            for _ in 0..3 {
                assert_eq!(Phase::at_elapsed(elapsed), first);
            }
        }
    }

    #[test]
    fn test_remaining_opening_saturates_at_zero() {
        assert_eq!(
            Phase::remaining_opening(Duration::from_millis(1000)),
            Duration::from_millis(2000)
        );
        assert_eq!(Phase::remaining_opening(Duration::from_secs(5)), Duration::ZERO);
    }
}
