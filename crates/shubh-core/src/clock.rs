//! Clock abstraction for determinism.
//!
//! Viewer phases are derived from elapsed wall time, so everything that reads
//! "now" goes through [`Clock`] and tests inject a fixed or manual clock.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Abstraction over system time for deterministic behavior.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the time elapsed since `earlier`.
    ///
    /// A timestamp in the future yields [`Duration::ZERO`] rather than a
    /// negative span.
    fn elapsed_since(&self, earlier: DateTime<Utc>) -> Duration {
        (self.now() - earlier).to_std().unwrap_or(Duration::ZERO)
    }
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct At(DateTime<Utc>);

    impl Clock for At {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn test_elapsed_since_returns_positive_span() {
        let start = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let clock = At(start + chrono::Duration::milliseconds(2999));

        assert_eq!(clock.elapsed_since(start), Duration::from_millis(2999));
    }

    #[test]
    fn test_elapsed_since_clamps_future_timestamps_to_zero() {
        let start = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let clock = At(start - chrono::Duration::seconds(5));

        assert_eq!(clock.elapsed_since(start), Duration::ZERO);
    }
}
