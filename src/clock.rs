//! Clock

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time.
///
/// The inventory reads time through this trait for expiry checks and sale
/// timestamps, so tests and demos can pin "now" to a known moment.
pub trait Clock {
    /// Returns the current moment.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports the given moment.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn fixed_clock_reports_the_pinned_moment() {
        let moment = Utc
            .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");

        let clock = FixedClock::new(moment);

        assert_eq!(clock.now(), moment);
        assert_eq!(clock.now(), moment);
    }
}
