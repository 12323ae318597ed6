use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use sentinel_core::{CrossSignal, InstrumentRow, RegimeBand, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One batch write against the instrument table: full-height signal
/// columns plus sparse transition timestamps, keyed by row offset.
///
/// Column vectors must cover every row of the table; a partial-width
/// write is a contract violation, not a smaller update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnUpdate {
    /// New value of the current-signal column, one entry per row
    pub current: Vec<CrossSignal>,
    /// New value of the previous-signal column, one entry per row
    pub previous: Vec<CrossSignal>,
    /// Transition timestamps; `None` leaves the existing cell untouched
    pub timestamps: Vec<Option<Timestamp>>,
}

impl ColumnUpdate {
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            current: Vec::with_capacity(rows),
            previous: Vec::with_capacity(rows),
            timestamps: Vec::with_capacity(rows),
        }
    }

    /// Append one row's worth of values, keeping the columns aligned.
    pub fn push(
        &mut self,
        current: CrossSignal,
        previous: CrossSignal,
        timestamp: Option<Timestamp>,
    ) {
        self.current.push(current);
        self.previous.push(previous);
        self.timestamps.push(timestamp);
    }

    /// Check that every column spans exactly `rows` rows.
    pub fn validate(&self, rows: usize) -> StoreResult<()> {
        for got in [self.current.len(), self.previous.len(), self.timestamps.len()] {
            if got != rows {
                return Err(StoreError::PartialWrite {
                    expected: rows,
                    got,
                });
            }
        }
        Ok(())
    }
}

/// Port for the per-instrument state table.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the whole table once. This is the run's consistent snapshot;
    /// the engine never re-reads within a run.
    async fn fetch_rows(&self) -> StoreResult<Vec<InstrumentRow>>;

    /// Apply one batch write across all rows. Implementations must
    /// reject partial-width updates (`ColumnUpdate::validate`).
    async fn write_columns(&self, update: ColumnUpdate) -> StoreResult<()>;
}

/// The five addressable regime cells, plus the active band.
///
/// The engine works exclusively with the tagged `RegimeBand`; stores
/// that physically keep three flag cells project at this boundary and
/// must surface multiple set flags as `StoreError::InconsistentFlags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeCells {
    /// Trailing multi-year peak of the macro series
    pub peak_value: Decimal,
    /// Latest observation
    pub current_value: Decimal,
    /// Which band is active (all flags blank reads as `Unknown`)
    pub active: RegimeBand,
    /// When the band last changed
    pub transition_date: Option<Timestamp>,
    /// Observation that triggered the last change
    pub trigger_value: Option<Decimal>,
}

/// Port for the regime cell block.
#[async_trait]
pub trait RegimeStore: Send + Sync {
    async fn read(&self) -> StoreResult<RegimeCells>;
    async fn write(&self, cells: RegimeCells) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_update_validates_width() {
        let mut update = ColumnUpdate::with_capacity(2);
        update.push(CrossSignal::Rising, CrossSignal::Rising, None);
        update.push(CrossSignal::Falling, CrossSignal::Falling, None);
        assert!(update.validate(2).is_ok());
        assert_eq!(
            update.validate(3),
            Err(StoreError::PartialWrite {
                expected: 3,
                got: 2
            })
        );
    }
}
