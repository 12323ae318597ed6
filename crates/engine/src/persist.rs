use sentinel_core::{CrossSignal, Timestamp};
use sentinel_ports::{ColumnUpdate, StoreResult};

/// Accumulates the run's computed state into one batch write.
///
/// One column-range write per field across all entities, instead of one
/// write per entity per field: the store sees a single `ColumnUpdate`
/// spanning every row. `finish` enforces the all-or-nothing width
/// contract before the update is allowed anywhere near the store.
#[derive(Debug)]
pub struct BatchPersister {
    rows: usize,
    update: ColumnUpdate,
}

impl BatchPersister {
    /// Start a batch covering exactly `rows` table rows.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            update: ColumnUpdate::with_capacity(rows),
        }
    }

    /// Record one row's computed state. Timestamps are only written for
    /// rows that transitioned; `None` leaves the stored cell untouched.
    pub fn record(
        &mut self,
        current: CrossSignal,
        previous: CrossSignal,
        transition_at: Option<Timestamp>,
    ) {
        self.update.push(current, previous, transition_at);
    }

    /// Seal the batch. Fails if any column does not span the full
    /// height of the table.
    pub fn finish(self) -> StoreResult<ColumnUpdate> {
        self.update.validate(self.rows)?;
        Ok(self.update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sentinel_ports::StoreError;

    #[test]
    fn test_full_width_batch_passes() {
        let mut persister = BatchPersister::new(2);
        persister.record(CrossSignal::Rising, CrossSignal::Rising, Some(Utc::now()));
        persister.record(CrossSignal::Falling, CrossSignal::Falling, None);

        let update = persister.finish().unwrap();
        assert_eq!(update.current.len(), 2);
        assert!(update.timestamps[0].is_some());
        assert!(update.timestamps[1].is_none());
    }

    #[test]
    fn test_partial_width_batch_rejected() {
        let mut persister = BatchPersister::new(3);
        persister.record(CrossSignal::Rising, CrossSignal::Rising, None);

        assert_eq!(
            persister.finish(),
            Err(StoreError::PartialWrite {
                expected: 3,
                got: 1
            })
        );
    }
}
