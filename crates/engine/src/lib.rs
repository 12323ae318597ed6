//! Sentinel Engine
//!
//! Run orchestration for the watcher. Each run is synchronous from the
//! caller's perspective and follows a fixed sequence:
//!
//! ```text
//! StateStore ──► snapshot read (once)
//!                     │
//!                     ▼
//!            classify every row          (sentinel-classify)
//!                     │
//!                     ▼
//!            detect edges against the
//!            captured snapshot           (never against fresh writes)
//!                     │
//!                     ▼
//!            one batch column write ──► StateStore
//!                     │
//!                     ▼
//!            compose + dispatch ──────► NotificationSink
//!            (nothing sent on empty runs)
//! ```
//!
//! Reads and computation fully complete before the batch write begins,
//! so a mid-run failure never leaves persisted state inconsistent with
//! the previous-signal column.

mod config;
mod crossover;
mod error;
mod notify;
mod outcome;
mod persist;
mod regime;

pub use config::{FirstRunPolicy, RunConfig};
pub use crossover::CrossoverRun;
pub use error::{EngineError, EngineResult};
pub use notify::{dispatch_report, report_failure};
pub use outcome::RunOutcome;
pub use persist::BatchPersister;
pub use regime::RegimeRun;
