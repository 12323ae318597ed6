use crate::entities::{RegimeTransition, TransitionEvent};
use crate::values::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Diagnostic metadata attached to a run's report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunDiagnostics {
    /// Rows read from the store
    pub entities_scanned: usize,
    /// Rows skipped for missing or invalid input
    pub entities_skipped: usize,
    /// Wall-clock duration of the run in milliseconds
    pub elapsed_ms: i64,
}

/// The outcome of one watcher run, consumed exactly once by the
/// notification sink and then discarded.
///
/// A report with no upward events, no downward events, and no regime
/// transition is never dispatched (silence on empty runs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique run identifier
    pub run_id: Uuid,
    pub timestamp: Timestamp,
    /// Upward crossover events, in entity iteration order
    pub upward: Vec<TransitionEvent>,
    /// Downward crossover events, in entity iteration order
    pub downward: Vec<TransitionEvent>,
    /// Regime band change, for regime runs
    pub regime: Option<RegimeTransition>,
    pub diagnostics: Option<RunDiagnostics>,
}

impl RunReport {
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            timestamp,
            upward: Vec::new(),
            downward: Vec::new(),
            regime: None,
            diagnostics: None,
        }
    }

    /// True when the run detected no state change at all.
    pub fn is_empty(&self) -> bool {
        self.upward.is_empty() && self.downward.is_empty() && self.regime.is_none()
    }

    /// Total number of crossover events in the report.
    pub fn event_count(&self) -> usize {
        self.upward.len() + self.downward.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_fresh_report_is_empty() {
        let report = RunReport::new(Utc::now());
        assert!(report.is_empty());
        assert_eq!(report.event_count(), 0);
    }

    #[test]
    fn test_report_serializes_for_diagnostics() {
        let mut report = RunReport::new(Utc::now());
        report.diagnostics = Some(RunDiagnostics {
            entities_scanned: 5,
            entities_skipped: 1,
            elapsed_ms: 12,
        });

        let json = serde_json::to_string(&report).unwrap();
        let back: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.run_id, report.run_id);
        assert_eq!(back.diagnostics.unwrap().entities_scanned, 5);
    }
}
