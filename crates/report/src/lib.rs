//! Sentinel Report Composition
//!
//! Turns a run's detected transitions into dispatchable messages:
//! - rich HTML crossover report with upward/downward tables
//! - plain regime-change mail
//! - reduced-fidelity fallback used when the primary send fails
//! - "script error" report for fatal run failures
//!
//! Composition is pure; the engine decides whether anything is sent at
//! all (empty runs send nothing).

mod crossover;
mod fallback;
mod regime;

pub use crossover::compose_crossover_report;
pub use fallback::{compose_error_report, compose_fallback_report};
pub use regime::compose_regime_report;
