//! Sentinel Classification
//!
//! Pure state derivation for the Sentinel watcher: map continuous
//! indicator inputs to discrete states and detect edges between the
//! stored state and the freshly classified one. No I/O, no async; the
//! engine crate owns sequencing and persistence.

mod cross;
mod error;
mod regime;

pub use cross::{classify_cross, detect_transition};
pub use error::{ClassifyError, ClassifyResult};
pub use regime::{RegimeThresholds, classify_regime, regime_transition};
