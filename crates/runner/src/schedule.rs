use std::future::Future;
use tokio::time::{Duration, MissedTickBehavior, interval};

/// Invoke a run on a fixed interval, serializing executions.
///
/// Each run is awaited to completion before the next tick is honored,
/// so two runs over the same dataset can never overlap; a tick missed
/// while a run is in flight fires after it finishes rather than
/// bursting. Run errors are logged and the loop continues - the run
/// itself already dispatched its error report.
///
/// `max_runs` bounds the loop for tests; `None` runs forever.
pub async fn run_on_interval<F, Fut, T, E>(period: Duration, max_runs: Option<usize>, mut run: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut completed = 0usize;
    loop {
        ticker.tick().await;

        if let Err(err) = run().await {
            log::error!("Scheduled run failed: {err}");
        }

        completed += 1;
        if let Some(max) = max_runs
            && completed >= max
        {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_runs_exactly_max_times() {
        let count = AtomicUsize::new(0);
        run_on_interval(Duration::from_secs(60), Some(3), || async {
            count.fetch_add(1, Ordering::SeqCst);
            Ok::<_, std::io::Error>(())
        })
        .await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_continues_after_run_error() {
        let count = AtomicUsize::new(0);
        run_on_interval(Duration::from_secs(60), Some(2), || async {
            count.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(std::io::Error::other("boom"))
        })
        .await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
