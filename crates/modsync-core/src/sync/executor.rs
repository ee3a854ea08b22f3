//! Fan-out and fan-in for one phase of a sync run

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::event::{Phase, SyncEvent, SyncObserver};
use crate::{Error, Result};

/// Run `work` once per job, each on its own blocking task.
///
/// Fan-out is bounded only by the number of jobs. Results come back through a
/// channel with one slot per job, so no worker ever waits to report. The
/// first error ends collection and is returned; tasks already running are not
/// cancelled and whatever they report afterwards is dropped.
///
/// A progress event is raised for every successful result, in order.
pub(crate) async fn run_phase<J, T, F>(
    phase: Phase,
    jobs: Vec<J>,
    observer: &dyn SyncObserver,
    work: F,
) -> Result<Vec<T>>
where
    J: Send + 'static,
    T: Send + 'static,
    F: Fn(J) -> Result<T> + Send + Sync + 'static,
{
    let total = jobs.len();
    if total == 0 {
        return Ok(Vec::new());
    }
    debug!(%phase, total, "starting phase");

    let (tx, mut rx) = mpsc::channel(total);
    let work = Arc::new(work);
    for job in jobs {
        let tx = tx.clone();
        let work = Arc::clone(&work);
        tokio::task::spawn_blocking(move || {
            let result = work(job);
            // The receiver is gone once an earlier task has failed.
            let _ = tx.blocking_send(result);
        });
    }
    drop(tx);

    let mut outcomes = Vec::with_capacity(total);
    for current in 1..=total {
        // Every sender dropped without a send means a task panicked.
        let result = rx.recv().await.ok_or_else(|| Error::TaskFailed {
            message: format!("{phase} task exited without reporting a result"),
        })?;
        let outcome = result.inspect_err(|e| warn!(%phase, error = %e, "aborting phase"))?;
        outcomes.push(outcome);
        observer.on_event(&SyncEvent::ProgressUpdated {
            phase,
            current,
            total,
        });
    }

    debug!(%phase, total, "phase complete");
    Ok(outcomes)
}
