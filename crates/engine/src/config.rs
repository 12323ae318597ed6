use serde::{Deserialize, Serialize};

/// What to persist as "previous state" for a row observed for the
/// very first time (no stored signal in either column).
///
/// Neither choice can fire an event on the first run, because an
/// undefined previous state never participates in a transition. The
/// policy decides when detection becomes armed for that row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FirstRunPolicy {
    /// Write the freshly classified state into the previous column.
    /// Detection is armed from the second run onward.
    #[default]
    AdoptCurrent,
    /// Leave the previous column blank on the first run. The second
    /// run then compares against blank (still silent) and arms
    /// detection from the third run onward.
    Unknown,
}

/// Per-run configuration.
///
/// `verbose` is passed into the run rather than read from any
/// process-wide flag; it gates debug logging plus the diagnostic
/// footer in the composed report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    pub first_run: FirstRunPolicy,
    pub verbose: bool,
}

impl RunConfig {
    /// Builder: set the first-run policy
    pub fn with_first_run(mut self, policy: FirstRunPolicy) -> Self {
        self.first_run = policy;
        self
    }

    /// Builder: enable verbose diagnostics
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
