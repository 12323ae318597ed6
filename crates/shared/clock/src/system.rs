use chrono::Utc;
use sentinel_core::Timestamp;
use sentinel_ports::Clock;

/// Wall-clock source for scheduled watch runs
///
/// Every run stamps its report and any regime transition date with this
/// clock, so the dates written back to the table reflect the moment the
/// run actually started.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
