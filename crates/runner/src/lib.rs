//! Sentinel Runner - wiring and entry points
//!
//! Assembles the watcher from its collaborators and exposes the two
//! schedulable entry points:
//!
//! ```text
//!   scheduler (hourly)          scheduler (daily)
//!         │                           │
//!         ▼                           ▼
//!   check_crossovers()          update_regime()
//!         │                           │
//!         ▼                           ▼
//!   ┌───────────────────────────────────────┐
//!   │               Watcher                 │
//!   │   StateStore / RegimeStore  (ports)   │
//!   │   NotificationSink          (port)    │
//!   │   Clock                     (port)    │
//!   └───────────────────────────────────────┘
//! ```
//!
//! Runs over the same dataset are serialized: `run_on_interval` awaits
//! each run to completion before the next tick fires.

mod bootstrap;
mod schedule;
mod watcher;

pub use bootstrap::{WatchBootstrap, WatchConfig};
pub use schedule::run_on_interval;
pub use watcher::Watcher;
