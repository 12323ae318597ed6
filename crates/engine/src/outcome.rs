use sentinel_core::RunReport;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The run's report, including diagnostics. May be empty.
    pub report: RunReport,
    /// Whether a notification reached the sink (primary or fallback)
    pub notified: bool,
}

impl RunOutcome {
    pub fn silent(report: RunReport) -> Self {
        Self {
            report,
            notified: false,
        }
    }
}
