//! Store Simulator
//!
//! In-memory implementations of the Sentinel ports, used by engine and
//! runner tests and by the runner's default wiring:
//!
//! - [`SheetStore`]: instrument table whose signal columns are kept as
//!   raw cell text and parsed back on every read
//! - [`RegimeSheet`]: the five regime cells, physically kept as three
//!   flag cells the way the external sheet models them
//! - [`RecordingSink`]: captures every dispatched message
//!
//! All three carry failure-injection switches so the engine's abort and
//! fallback paths can be exercised deterministically.

mod regime;
mod sheet;
mod sink;

pub use regime::RegimeSheet;
pub use sheet::SheetStore;
pub use sink::RecordingSink;
