use crate::entities::{CrossSignal, RegimeBand};
use crate::values::{IndicatorValue, Price, Symbol, Timestamp};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Direction of a crossover transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Fast crossed above slow
    Upward,
    /// Fast crossed below slow
    Downward,
}

/// A detected crossover state change for one instrument.
///
/// Created transiently per run; never persisted as its own record. Its
/// only durable traces are the timestamp written to the instrument's row
/// and its appearance in the dispatched report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub symbol: Symbol,
    pub name: String,
    pub direction: Direction,
    pub from: CrossSignal,
    pub to: CrossSignal,
    pub price: Price,
    pub fast: IndicatorValue,
    pub slow: IndicatorValue,
    /// Percentage distance of price from the fast indicator
    pub pct_above_fast: Decimal,
    /// Percentage distance of price from the slow indicator
    pub pct_above_slow: Decimal,
    pub currency: String,
    pub timestamp: Timestamp,
}

impl TransitionEvent {
    /// Build an event, deriving the percentage-distance annotations.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: impl Into<Symbol>,
        name: impl Into<String>,
        direction: Direction,
        from: CrossSignal,
        to: CrossSignal,
        price: Price,
        fast: IndicatorValue,
        slow: IndicatorValue,
        currency: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            direction,
            from,
            to,
            price,
            fast,
            slow,
            pct_above_fast: pct_distance(price, fast),
            pct_above_slow: pct_distance(price, slow),
            currency: currency.into(),
            timestamp,
        }
    }
}

/// Percentage distance of `value` above `reference`, rounded to two
/// decimal places. Zero reference yields zero rather than dividing.
pub fn pct_distance(value: Decimal, reference: Decimal) -> Decimal {
    if reference.is_zero() {
        return Decimal::ZERO;
    }
    ((value / reference - Decimal::ONE) * dec!(100)).round_dp(2)
}

/// A detected regime band change for the watched macro series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimeTransition {
    pub from: RegimeBand,
    pub to: RegimeBand,
    /// Observation that triggered the change
    pub current_value: Decimal,
    /// Rolling peak the thresholds were derived from
    pub peak_value: Decimal,
    pub timestamp: Timestamp,
}
