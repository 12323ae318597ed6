use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Indicator value (moving average, ratio input, rolling peak, ...)
/// Computed upstream; Sentinel only reads these.
pub type IndicatorValue = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Symbol identifier for a watched instrument
pub type Symbol = String;
