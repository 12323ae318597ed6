use async_trait::async_trait;
use sentinel_core::{CrossSignal, InstrumentRow};
use sentinel_ports::{ColumnUpdate, StateStore, StoreError, StoreResult};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Backing storage keeps the signal columns as raw cell text, the way a
/// real table holds them. Reads parse the text back into `CrossSignal`,
/// so blank or garbage cells degrade to `Undefined` rather than failing.
#[derive(Debug, Clone)]
struct StoredRow {
    row: InstrumentRow,
    current_cell: String,
    previous_cell: String,
}

impl StoredRow {
    fn seed(row: InstrumentRow) -> Self {
        let current_cell = row.current_signal.as_cell().to_string();
        let previous_cell = row.previous_signal.as_cell().to_string();
        Self {
            row,
            current_cell,
            previous_cell,
        }
    }

    fn project(&self) -> InstrumentRow {
        let mut row = self.row.clone();
        row.current_signal = CrossSignal::from_cell(&self.current_cell);
        row.previous_signal = CrossSignal::from_cell(&self.previous_cell);
        row
    }
}

/// In-memory instrument table.
#[derive(Debug)]
pub struct SheetStore {
    name: String,
    rows: Option<Mutex<Vec<StoredRow>>>,
    fail_writes: AtomicBool,
}

impl SheetStore {
    /// A table seeded with the given rows.
    pub fn new(name: impl Into<String>, rows: Vec<InstrumentRow>) -> Self {
        Self {
            name: name.into(),
            rows: Some(Mutex::new(rows.into_iter().map(StoredRow::seed).collect())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// A table that does not exist: every operation fails with
    /// `MissingResource`, exercising the fatal pre-read abort.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: None,
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make subsequent batch writes fail.
    pub fn inject_write_failure(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Overwrite the signal cells of one row with arbitrary text.
    pub async fn set_signal_cells_raw(
        &self,
        index: usize,
        current: impl Into<String>,
        previous: impl Into<String>,
    ) {
        if let Some(rows) = &self.rows {
            let mut rows = rows.lock().await;
            if let Some(stored) = rows.get_mut(index) {
                stored.current_cell = current.into();
                stored.previous_cell = previous.into();
            }
        }
    }

    /// Current rows, for assertions.
    pub async fn rows(&self) -> Vec<InstrumentRow> {
        match &self.rows {
            Some(rows) => rows.lock().await.iter().map(StoredRow::project).collect(),
            None => Vec::new(),
        }
    }

    fn table(&self) -> StoreResult<&Mutex<Vec<StoredRow>>> {
        self.rows
            .as_ref()
            .ok_or_else(|| StoreError::MissingResource(self.name.clone()))
    }
}

#[async_trait]
impl StateStore for SheetStore {
    async fn fetch_rows(&self) -> StoreResult<Vec<InstrumentRow>> {
        Ok(self.table()?.lock().await.iter().map(StoredRow::project).collect())
    }

    async fn write_columns(&self, update: ColumnUpdate) -> StoreResult<()> {
        let table = self.table()?;
        let mut rows = table.lock().await;

        update.validate(rows.len())?;

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write("injected write failure".to_string()));
        }

        // Row N in equals row N out: columns are keyed by row offset.
        for (i, stored) in rows.iter_mut().enumerate() {
            stored.current_cell = update.current[i].as_cell().to_string();
            stored.previous_cell = update.previous[i].as_cell().to_string();
            if let Some(ts) = update.timestamps[i] {
                stored.row.last_transition = Some(ts);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_core::CrossSignal;

    #[tokio::test]
    async fn test_missing_sheet_fails_reads() {
        let store = SheetStore::missing("Watchlist");
        assert_eq!(
            store.fetch_rows().await,
            Err(StoreError::MissingResource("Watchlist".to_string()))
        );
    }

    #[tokio::test]
    async fn test_write_preserves_row_identity() {
        let store = SheetStore::new(
            "Watchlist",
            vec![
                InstrumentRow::new("AAA", "Alpha"),
                InstrumentRow::new("BBB", "Beta"),
            ],
        );

        let mut update = ColumnUpdate::with_capacity(2);
        update.push(CrossSignal::Rising, CrossSignal::Rising, None);
        update.push(CrossSignal::Falling, CrossSignal::Falling, None);
        store.write_columns(update).await.unwrap();

        let rows = store.rows().await;
        assert_eq!(rows[0].symbol, "AAA");
        assert_eq!(rows[0].current_signal, CrossSignal::Rising);
        assert_eq!(rows[1].symbol, "BBB");
        assert_eq!(rows[1].current_signal, CrossSignal::Falling);
    }

    #[tokio::test]
    async fn test_partial_width_write_rejected() {
        let store = SheetStore::new(
            "Watchlist",
            vec![
                InstrumentRow::new("AAA", "Alpha"),
                InstrumentRow::new("BBB", "Beta"),
            ],
        );

        let mut update = ColumnUpdate::with_capacity(1);
        update.push(CrossSignal::Rising, CrossSignal::Rising, None);

        assert_eq!(
            store.write_columns(update).await,
            Err(StoreError::PartialWrite {
                expected: 2,
                got: 1
            })
        );
    }

    #[tokio::test]
    async fn test_garbage_cells_read_back_as_undefined() {
        let store = SheetStore::new(
            "Watchlist",
            vec![
                InstrumentRow::new("AAA", "Alpha"),
                InstrumentRow::new("BBB", "Beta"),
            ],
        );

        store.set_signal_cells_raw(0, "bullish?", "").await;
        store.set_signal_cells_raw(1, "  FALLING ", "RISING").await;

        let rows = store.fetch_rows().await.unwrap();
        assert_eq!(rows[0].current_signal, CrossSignal::Undefined);
        assert_eq!(rows[0].previous_signal, CrossSignal::Undefined);
        assert_eq!(rows[1].current_signal, CrossSignal::Falling);
        assert_eq!(rows[1].previous_signal, CrossSignal::Rising);
    }

    #[tokio::test]
    async fn test_writes_land_as_cell_text() {
        let store = SheetStore::new("Watchlist", vec![InstrumentRow::new("AAA", "Alpha")]);

        let mut update = ColumnUpdate::with_capacity(1);
        update.push(CrossSignal::Undefined, CrossSignal::Rising, None);
        store.write_columns(update).await.unwrap();

        let rows = store.rows().await;
        assert_eq!(rows[0].current_signal, CrossSignal::Undefined);
        assert_eq!(rows[0].previous_signal, CrossSignal::Rising);
    }
}
