use sentinel_engine::{
    CrossoverRun, EngineResult, RegimeRun, RunConfig, RunOutcome, report_failure,
};
use sentinel_ports::{Clock, NotificationSink, RegimeStore, StateStore};
use std::sync::Arc;

/// The assembled watcher: both run types over shared collaborators.
///
/// Holds the ports behind `Arc` so the same store and sink instances
/// can back both entry points and outlive individual runs.
pub struct Watcher {
    state_store: Arc<dyn StateStore>,
    regime_store: Arc<dyn RegimeStore>,
    sink: Arc<dyn NotificationSink>,
    clock: Arc<dyn Clock>,
    config: RunConfig,
}

impl Watcher {
    pub fn new(
        state_store: Arc<dyn StateStore>,
        regime_store: Arc<dyn RegimeStore>,
        sink: Arc<dyn NotificationSink>,
        clock: Arc<dyn Clock>,
        config: RunConfig,
    ) -> Self {
        Self {
            state_store,
            regime_store,
            sink,
            clock,
            config,
        }
    }

    /// Entry point for the crossover check. Intended to be invoked on
    /// a fixed schedule with no arguments.
    ///
    /// A fatal error is reported once through the sink as a script
    /// error and then returned; the error dispatch itself can only
    /// log, never throw.
    pub async fn check_crossovers(&self) -> EngineResult<RunOutcome> {
        let run = CrossoverRun::new(
            self.state_store.as_ref(),
            self.sink.as_ref(),
            self.clock.as_ref(),
            self.config.clone(),
        );
        match run.execute().await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                log::error!("Crossover check failed: {err}");
                report_failure(self.sink.as_ref(), "crossover check", &err.to_string()).await;
                Err(err)
            }
        }
    }

    /// Entry point for the regime update. Intended to be invoked on a
    /// fixed schedule with no arguments.
    pub async fn update_regime(&self) -> EngineResult<RunOutcome> {
        let run = RegimeRun::new(
            self.regime_store.as_ref(),
            self.sink.as_ref(),
            self.clock.as_ref(),
            self.config.clone(),
        );
        match run.execute().await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                log::error!("Regime update failed: {err}");
                report_failure(self.sink.as_ref(), "regime update", &err.to_string()).await;
                Err(err)
            }
        }
    }
}
