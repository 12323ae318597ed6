use chrono::{TimeZone, Utc};
use sentinel_core::Timestamp;
use sentinel_ports::Clock;

/// Clock pinned to a fixed instant, for deterministic tests
///
/// Every call to `now()` returns the same timestamp, so assertions on
/// transition timestamps can compare for equality.
pub struct FixedClock {
    instant: Timestamp,
}

impl FixedClock {
    pub fn new(instant: Timestamp) -> Self {
        Self { instant }
    }

    /// Convenience constructor from a calendar date at midnight UTC.
    pub fn at_date(year: i32, month: u32, day: u32) -> Self {
        let instant = Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self::new(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.instant
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_never_advances() {
        let clock = FixedClock::at_date(2025, 6, 1);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
    }
}
