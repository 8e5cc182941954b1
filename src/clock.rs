//! Clock implementations
//!
//! Provides trait-based wall-clock access. `SystemClock` reads the host
//! clock, `FixedClock` returns a preset instant so that formatting can
//! be exercised deterministically in tests.

use std::time::{Instant, SystemTime};

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::traits::TimeSource;

/// System wall-clock implementation
///
/// Anchors `SystemTime` once at first use and derives subsequent
/// readings from the monotonic clock, so repeated invocations do not
/// trigger a syscall each time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

static START_INSTANT: Lazy<Instant> = Lazy::new(Instant::now);
static START_SYSTEM_TIME: Lazy<SystemTime> = Lazy::new(SystemTime::now);

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from(*START_SYSTEM_TIME + START_INSTANT.elapsed())
    }
}

/// Fixed-instant clock for deterministic tests
///
/// Always returns the instant it was constructed with.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Creates a fixed clock from Unix epoch seconds
    ///
    /// Out-of-range timestamps fall back to the Unix epoch.
    pub fn from_timestamp(secs: i64) -> Self {
        FixedClock(Utc.timestamp_opt(secs, 0).single().unwrap_or_default())
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_constructed_instant() {
        let clock = FixedClock::from_timestamp(1_000_000);
        assert_eq!(clock.now().timestamp(), 1_000_000);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a, "clock went backwards: {} then {}", a, b);
    }

    #[test]
    fn test_system_clock_tracks_unix_epoch() {
        let now = SystemClock.now();
        // Any plausible present-day reading is far past 2020-01-01.
        assert!(now.timestamp() > 1_577_836_800);
    }
}
