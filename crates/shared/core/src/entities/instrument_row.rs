use crate::entities::CrossSignal;
use crate::values::{IndicatorValue, Price, Symbol, Timestamp};
use serde::{Deserialize, Serialize};

/// One row of the watched instrument table, as read from the store.
///
/// Indicator values are computed upstream; Sentinel only reads them.
/// Any of the numeric fields may be blank in the store, which is valid
/// input and classifies as `Undefined`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentRow {
    /// Ticker symbol (row identity)
    pub symbol: Symbol,
    /// Display name
    pub name: String,
    /// Last known price
    pub price: Option<Price>,
    /// Fast indicator (e.g. 50-day moving average)
    pub fast: Option<IndicatorValue>,
    /// Slow indicator (e.g. 200-day moving average)
    pub slow: Option<IndicatorValue>,
    /// Currency tag for display
    pub currency: String,
    /// Signal written by the previous run
    pub previous_signal: CrossSignal,
    /// Signal written by the latest run
    pub current_signal: CrossSignal,
    /// When this row last transitioned, if ever
    pub last_transition: Option<Timestamp>,
}

impl InstrumentRow {
    /// Create a row with the given identity and no recorded state.
    pub fn new(symbol: impl Into<Symbol>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price: None,
            fast: None,
            slow: None,
            currency: String::new(),
            previous_signal: CrossSignal::Undefined,
            current_signal: CrossSignal::Undefined,
            last_transition: None,
        }
    }

    /// Builder: set price and currency
    pub fn with_price(mut self, price: Price, currency: impl Into<String>) -> Self {
        self.price = Some(price);
        self.currency = currency.into();
        self
    }

    /// Builder: set indicator values
    pub fn with_indicators(mut self, fast: IndicatorValue, slow: IndicatorValue) -> Self {
        self.fast = Some(fast);
        self.slow = Some(slow);
        self
    }

    /// Builder: set the stored signal state
    pub fn with_signals(mut self, previous: CrossSignal, current: CrossSignal) -> Self {
        self.previous_signal = previous;
        self.current_signal = current;
        self
    }

    /// A row is evaluable when identity, price, and both indicators are
    /// present. Rows failing this are skipped (counted, not fatal).
    pub fn is_evaluable(&self) -> bool {
        !self.symbol.is_empty() && self.price.is_some() && self.fast.is_some() && self.slow.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_and_evaluable() {
        let row = InstrumentRow::new("AAA", "Alpha Corp")
            .with_price(dec!(100), "USD")
            .with_indicators(dec!(52), dec!(50));
        assert!(row.is_evaluable());
        assert_eq!(row.currency, "USD");
    }

    #[test]
    fn test_missing_indicator_not_evaluable() {
        let row = InstrumentRow::new("AAA", "Alpha Corp").with_price(dec!(100), "USD");
        assert!(!row.is_evaluable());
    }

    #[test]
    fn test_blank_symbol_not_evaluable() {
        let row = InstrumentRow::new("", "")
            .with_price(dec!(1), "")
            .with_indicators(dec!(1), dec!(2));
        assert!(!row.is_evaluable());
    }
}
