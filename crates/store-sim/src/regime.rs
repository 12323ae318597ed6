use async_trait::async_trait;
use rust_decimal::Decimal;
use sentinel_core::{RegimeBand, Timestamp};
use sentinel_ports::{RegimeCells, RegimeStore, StoreError, StoreResult};
use tokio::sync::Mutex;

/// Physical shape of the regime cell block: the external sheet keeps
/// three independent flag cells, not a tagged value.
#[derive(Debug, Clone, Default)]
struct CellBlock {
    peak_value: Decimal,
    current_value: Decimal,
    normal_flag: bool,
    stress_flag: bool,
    crisis_flag: bool,
    transition_date: Option<Timestamp>,
    trigger_value: Option<Decimal>,
}

/// In-memory regime cell block.
///
/// Projects between the tri-flag cells and the tagged `RegimeBand` at
/// the boundary: all flags blank reads as `Unknown`, more than one set
/// flag is surfaced as `InconsistentFlags` instead of being guessed at.
#[derive(Debug)]
pub struct RegimeSheet {
    cells: Mutex<CellBlock>,
}

impl RegimeSheet {
    /// A block with the given series values and no recorded band.
    pub fn new(peak_value: Decimal, current_value: Decimal) -> Self {
        Self {
            cells: Mutex::new(CellBlock {
                peak_value,
                current_value,
                ..CellBlock::default()
            }),
        }
    }

    /// Update the series values, as the upstream refresh would.
    pub async fn set_values(&self, peak_value: Decimal, current_value: Decimal) {
        let mut cells = self.cells.lock().await;
        cells.peak_value = peak_value;
        cells.current_value = current_value;
    }

    /// Force the raw flag cells, bypassing projection. Lets tests model
    /// external corruption (two flags set at once).
    pub async fn set_flags_raw(&self, normal: bool, stress: bool, crisis: bool) {
        let mut cells = self.cells.lock().await;
        cells.normal_flag = normal;
        cells.stress_flag = stress;
        cells.crisis_flag = crisis;
    }

    /// Snapshot of the recorded transition cells, for assertions.
    pub async fn transition_cells(&self) -> (Option<Timestamp>, Option<Decimal>) {
        let cells = self.cells.lock().await;
        (cells.transition_date, cells.trigger_value)
    }
}

fn project_band(cells: &CellBlock) -> StoreResult<RegimeBand> {
    let set = [cells.normal_flag, cells.stress_flag, cells.crisis_flag]
        .iter()
        .filter(|f| **f)
        .count();
    match set {
        0 => Ok(RegimeBand::Unknown),
        1 if cells.normal_flag => Ok(RegimeBand::Normal),
        1 if cells.stress_flag => Ok(RegimeBand::Stress),
        1 => Ok(RegimeBand::Crisis),
        n => Err(StoreError::InconsistentFlags(n)),
    }
}

#[async_trait]
impl RegimeStore for RegimeSheet {
    async fn read(&self) -> StoreResult<RegimeCells> {
        let cells = self.cells.lock().await;
        Ok(RegimeCells {
            peak_value: cells.peak_value,
            current_value: cells.current_value,
            active: project_band(&cells)?,
            transition_date: cells.transition_date,
            trigger_value: cells.trigger_value,
        })
    }

    async fn write(&self, update: RegimeCells) -> StoreResult<()> {
        let mut cells = self.cells.lock().await;
        cells.peak_value = update.peak_value;
        cells.current_value = update.current_value;
        cells.normal_flag = update.active == RegimeBand::Normal;
        cells.stress_flag = update.active == RegimeBand::Stress;
        cells.crisis_flag = update.active == RegimeBand::Crisis;
        cells.transition_date = update.transition_date;
        cells.trigger_value = update.trigger_value;
        Ok(())
    }
}
