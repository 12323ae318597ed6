use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete crossover state of a fast indicator relative to a slow one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CrossSignal {
    /// Fast indicator is above the slow indicator
    Rising,
    /// Fast indicator is below the slow indicator
    Falling,
    /// Inputs equal, missing, or invalid - carries no directional information
    #[default]
    Undefined,
}

impl CrossSignal {
    /// Returns true if the signal carries directional information.
    /// Only defined signals can be the source or target of a transition.
    pub fn is_defined(&self) -> bool {
        !matches!(self, CrossSignal::Undefined)
    }

    /// Parse the stored cell representation. Blank or unrecognized
    /// cells map to `Undefined`, never to an error.
    pub fn from_cell(cell: &str) -> Self {
        match cell.trim() {
            "RISING" => CrossSignal::Rising,
            "FALLING" => CrossSignal::Falling,
            _ => CrossSignal::Undefined,
        }
    }

    /// Cell representation written back to the store.
    /// `Undefined` persists as an empty cell.
    pub fn as_cell(&self) -> &'static str {
        match self {
            CrossSignal::Rising => "RISING",
            CrossSignal::Falling => "FALLING",
            CrossSignal::Undefined => "",
        }
    }
}

impl fmt::Display for CrossSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_cell())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_round_trip() {
        assert_eq!(CrossSignal::from_cell("RISING"), CrossSignal::Rising);
        assert_eq!(CrossSignal::from_cell(" FALLING "), CrossSignal::Falling);
        assert_eq!(CrossSignal::Rising.as_cell(), "RISING");
    }

    #[test]
    fn test_blank_and_garbage_are_undefined() {
        assert_eq!(CrossSignal::from_cell(""), CrossSignal::Undefined);
        assert_eq!(CrossSignal::from_cell("GOLDEN?"), CrossSignal::Undefined);
        assert!(!CrossSignal::from_cell("").is_defined());
    }
}
