use crate::watcher::Watcher;
use rust_decimal::Decimal;
use sentinel_clock::SystemClock;
use sentinel_core::InstrumentRow;
use sentinel_engine::RunConfig;
use std::sync::Arc;
use store_sim::{RecordingSink, RegimeSheet, SheetStore};

/// Bootstrap configuration for a watcher instance.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Name of the instrument table
    pub watchlist_name: String,
    /// Seed rows for the instrument table
    pub rows: Vec<InstrumentRow>,
    /// Rolling peak of the macro series
    pub regime_peak: Decimal,
    /// Latest observation of the macro series
    pub regime_current: Decimal,
    /// Engine run configuration
    pub run: RunConfig,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            watchlist_name: "Watchlist".to_string(),
            rows: Vec::new(),
            regime_peak: Decimal::ONE,
            regime_current: Decimal::ONE,
            run: RunConfig::default(),
        }
    }
}

/// Builds a fully wired watcher over the simulated collaborators.
///
/// Keeps handles to the concrete store and sink so tests can seed
/// inputs, inject failures, and inspect outputs around the runs.
pub struct WatchBootstrap {
    pub watcher: Watcher,
    pub sheet: Arc<SheetStore>,
    pub regime: Arc<RegimeSheet>,
    pub sink: Arc<RecordingSink>,
}

impl WatchBootstrap {
    pub fn with_config(config: WatchConfig) -> Self {
        let sheet = Arc::new(SheetStore::new(config.watchlist_name.clone(), config.rows));
        let regime = Arc::new(RegimeSheet::new(config.regime_peak, config.regime_current));
        let sink = Arc::new(RecordingSink::new());

        log::info!(
            "Bootstrapped watcher over '{}' with regime peak {}",
            config.watchlist_name,
            config.regime_peak
        );

        let watcher = Watcher::new(
            sheet.clone(),
            regime.clone(),
            sink.clone(),
            Arc::new(SystemClock::new()),
            config.run,
        );

        Self {
            watcher,
            sheet,
            regime,
            sink,
        }
    }
}
