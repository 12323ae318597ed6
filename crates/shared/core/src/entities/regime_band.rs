use serde::{Deserialize, Serialize};
use std::fmt;

/// Market regime band derived from a value's distance below its rolling peak.
///
/// This tagged enum is the sole in-engine representation. The external
/// store models the band as three mutually exclusive flag cells; store
/// implementations project to and from that shape at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RegimeBand {
    /// Value within 20% of the rolling peak
    Normal,
    /// Value 20-40% below the rolling peak
    Stress,
    /// Value more than 40% below the rolling peak
    Crisis,
    /// No band recorded yet (all flag cells blank on first run)
    #[default]
    Unknown,
}

impl RegimeBand {
    /// Returns true once a band has been recorded.
    pub fn is_known(&self) -> bool {
        !matches!(self, RegimeBand::Unknown)
    }

    /// Human-readable label used in notifications.
    pub fn label(&self) -> &'static str {
        match self {
            RegimeBand::Normal => "Normal",
            RegimeBand::Stress => "Stress",
            RegimeBand::Crisis => "Crisis",
            RegimeBand::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RegimeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
