use sentinel_core::Timestamp;

/// Time source behind report timestamps and transition dates
///
/// A run never calls `Utc::now()` directly. It reads the clock once and
/// uses that instant for the report header, the `last_transition` column
/// and the regime transition date. Tests swap in a fixed clock so those
/// cells can be asserted exactly.
pub trait Clock: Send + Sync {
    /// The instant the current run is considered to have started
    fn now(&self) -> Timestamp;

    /// Identifier for log lines
    fn name(&self) -> &str {
        "Clock"
    }
}
