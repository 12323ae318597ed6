//! Sentinel Ports
//!
//! Port definitions (traits) for the Sentinel watcher.
//! These define the boundaries between the engine and its external
//! collaborators: the tabular state store, the regime cell block, the
//! notification transport, and the time source.

mod clock;
mod error;
mod sink;
mod store;

pub use clock::Clock;
pub use error::{SinkError, SinkResult, StoreError, StoreResult};
pub use sink::{Message, NotificationSink};
pub use store::{ColumnUpdate, RegimeCells, RegimeStore, StateStore};
