use crate::config::RunConfig;
use crate::error::EngineResult;
use crate::notify::dispatch_report;
use crate::outcome::RunOutcome;
use sentinel_classify::{RegimeThresholds, classify_regime, regime_transition};
use sentinel_core::{RegimeTransition, RunReport};
use sentinel_ports::{Clock, NotificationSink, RegimeStore};
use sentinel_report::compose_regime_report;

/// One regime evaluation over the macro series cell block.
///
/// Re-entering the active band is a complete no-op: no cell rewrite, no
/// timestamp update, no notification. Only a band change touches the
/// store, and then exactly one flag ends up set.
pub struct RegimeRun<'a> {
    store: &'a dyn RegimeStore,
    sink: &'a dyn NotificationSink,
    clock: &'a dyn Clock,
    config: RunConfig,
}

impl<'a> RegimeRun<'a> {
    pub fn new(
        store: &'a dyn RegimeStore,
        sink: &'a dyn NotificationSink,
        clock: &'a dyn Clock,
        config: RunConfig,
    ) -> Self {
        Self {
            store,
            sink,
            clock,
            config,
        }
    }

    /// Execute one run: read cells, derive thresholds, classify,
    /// persist and notify only on a band change.
    ///
    /// A non-positive peak is fatal: it invalidates both band
    /// boundaries, so the whole run is rejected rather than classified.
    pub async fn execute(&self) -> EngineResult<RunOutcome> {
        let now = self.clock.now();

        let cells = self.store.read().await?;
        let thresholds = RegimeThresholds::from_peak(cells.peak_value)?;
        let band = classify_regime(thresholds, cells.current_value);

        if !cells.active.is_known() {
            log::info!("No prior regime recorded, first classification is {band}");
        }

        if self.config.verbose {
            log::debug!(
                "Regime inputs: peak={} current={} active={} classified={band}",
                cells.peak_value,
                cells.current_value,
                cells.active
            );
        }

        let mut report = RunReport::new(now);

        let Some((from, to)) = regime_transition(cells.active, band) else {
            log::info!("Regime unchanged ({band}), nothing written or sent");
            return Ok(RunOutcome::silent(report));
        };

        let transition = RegimeTransition {
            from,
            to,
            current_value: cells.current_value,
            peak_value: cells.peak_value,
            timestamp: now,
        };

        // Rewrite the cell block before notifying: exactly one flag
        // set, plus the trigger date and triggering observation.
        let mut updated = cells;
        updated.active = to;
        updated.transition_date = Some(now);
        updated.trigger_value = Some(transition.current_value);
        self.store.write(updated).await?;

        log::info!("Regime change detected: {from} -> {to}");

        report.regime = Some(transition.clone());
        let message = compose_regime_report(&transition);
        let notified = dispatch_report(self.sink, message, &report).await;

        Ok(RunOutcome { report, notified })
    }
}
