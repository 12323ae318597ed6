use crate::config::{FirstRunPolicy, RunConfig};
use crate::error::EngineResult;
use crate::notify::dispatch_report;
use crate::outcome::RunOutcome;
use crate::persist::BatchPersister;
use sentinel_classify::{classify_cross, detect_transition};
use sentinel_core::{CrossSignal, Direction, RunDiagnostics, RunReport, TransitionEvent};
use sentinel_ports::{Clock, NotificationSink, StateStore};
use sentinel_report::compose_crossover_report;

/// One crossover evaluation over the whole instrument table.
///
/// Sequencing contract: the full prior-state snapshot is captured from
/// the single table read before any new state is computed, every
/// comparison runs against that snapshot, and the batch write happens
/// only after all comparisons are done. Comparing against a value that
/// was already overwritten this run would make every comparison see
/// `previous == new` and silence the detector forever.
pub struct CrossoverRun<'a> {
    store: &'a dyn StateStore,
    sink: &'a dyn NotificationSink,
    clock: &'a dyn Clock,
    config: RunConfig,
}

impl<'a> CrossoverRun<'a> {
    pub fn new(
        store: &'a dyn StateStore,
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

    /// Execute one run: read, classify, detect, persist, notify.
    ///
    /// Fatal errors (missing table, rejected batch write) abort before
    /// any success notification. Invalid rows degrade to `Undefined`
    /// and are counted in the diagnostics, never fatal.
    pub async fn execute(&self) -> EngineResult<RunOutcome> {
        let started = std::time::Instant::now();
        let now = self.clock.now();

        let rows = self.store.fetch_rows().await?;

        // Prior-state snapshot, captured before anything is computed.
        let snapshot: Vec<CrossSignal> = rows.iter().map(|r| r.previous_signal).collect();

        let mut report = RunReport::new(now);
        let mut persister = BatchPersister::new(rows.len());
        let mut skipped = 0usize;

        for (i, row) in rows.iter().enumerate() {
            let new_signal = if row.is_evaluable() {
                classify_cross(row.fast, row.slow)
            } else {
                skipped += 1;
                if self.config.verbose {
                    log::debug!("Skipping row {i} ({}): incomplete input", row.symbol);
                }
                CrossSignal::Undefined
            };

            let prior = snapshot[i];
            let transition_at = match detect_transition(prior, new_signal) {
                Some(direction) => {
                    let event = TransitionEvent::new(
                        row.symbol.clone(),
                        row.name.clone(),
                        direction,
                        prior,
                        new_signal,
                        row.price.unwrap_or_default(),
                        row.fast.unwrap_or_default(),
                        row.slow.unwrap_or_default(),
                        row.currency.clone(),
                        now,
                    );
                    if self.config.verbose {
                        log::debug!(
                            "{:?} crossover detected for {} ({prior} -> {new_signal})",
                            direction,
                            row.symbol
                        );
                    }
                    match direction {
                        Direction::Upward => report.upward.push(event),
                        Direction::Downward => report.downward.push(event),
                    }
                    Some(now)
                }
                None => None,
            };

            // Rows with no recorded state at all follow the first-run
            // policy; everything else writes previous := current so the
            // next run compares against this run's outcome.
            let first_observation =
                !row.previous_signal.is_defined() && !row.current_signal.is_defined();
            let previous_out = if first_observation && self.config.first_run == FirstRunPolicy::Unknown
            {
                CrossSignal::Undefined
            } else {
                new_signal
            };

            persister.record(new_signal, previous_out, transition_at);
        }

        report.diagnostics = Some(RunDiagnostics {
            entities_scanned: rows.len(),
            entities_skipped: skipped,
            elapsed_ms: started.elapsed().as_millis() as i64,
        });

        // All reads and comparisons are done; commit the batch. A
        // rejected write aborts here, before any notification.
        let update = persister.finish()?;
        self.store.write_columns(update).await?;

        log::info!(
            "Detected {} upward and {} downward crossovers across {} rows",
            report.upward.len(),
            report.downward.len(),
            rows.len()
        );

        let notified = if report.is_empty() {
            log::info!("No crossovers detected, nothing sent");
            false
        } else {
            let message = compose_crossover_report(&report, self.config.verbose);
            dispatch_report(self.sink, message, &report).await
        };

        Ok(RunOutcome { report, notified })
    }
}
