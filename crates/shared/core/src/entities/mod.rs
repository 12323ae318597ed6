//! Domain entities for the watcher

mod cross_signal;
mod instrument_row;
mod regime_band;
mod report;
mod transition;

pub use cross_signal::CrossSignal;
pub use instrument_row::InstrumentRow;
pub use regime_band::RegimeBand;
pub use report::{RunDiagnostics, RunReport};
pub use transition::{Direction, RegimeTransition, TransitionEvent};
