//! Sentinel Clock Infrastructure
//!
//! Time sources for the watcher:
//! - [`SystemClock`] returns real wall-clock time for production runs
//! - [`FixedClock`] returns a pinned instant for deterministic tests,
//!   so transition timestamps in assertions are exact

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use sentinel_ports::Clock;
