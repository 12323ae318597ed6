//! Sentinel Core Domain
//!
//! Pure domain types for the Sentinel state-change watcher.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    CrossSignal, Direction, InstrumentRow, RegimeBand, RegimeTransition, RunDiagnostics,
    RunReport, TransitionEvent,
};
pub use values::{IndicatorValue, Price, Symbol, Timestamp};
