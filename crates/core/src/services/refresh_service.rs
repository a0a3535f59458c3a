use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{debug, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::services::rate_cache::RateCache;

/// Handle to a running background rate-refresh loop.
///
/// The loop fetches immediately on spawn and then once per period,
/// re-priming the shared cache so readers mostly hit fresh entries. Tick
/// failures are logged, not propagated — the next tick is the retry policy
/// (no backoff).
///
/// Cancellation: `stop()` signals the loop and waits for it to exit; after
/// it returns, no further fetches are scheduled and no timer remains.
/// Dropping the handle without calling `stop()` aborts the task.
pub struct RefreshTask {
    stop_tx: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTask {
    /// Spawn the refresh loop on the current Tokio runtime.
    #[must_use]
    pub fn spawn(cache: Arc<RateCache>, period: Duration) -> Self {
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        match cache.get_rates(Utc::now()).await {
                            Ok(snapshot) => {
                                debug!("Rates refreshed (fetched at {})", snapshot.fetched_at());
                            }
                            Err(e) => {
                                warn!("Rate refresh failed, retrying next tick: {e}");
                            }
                        }
                    }
                    // Also fires when the sender is dropped.
                    _ = stop_rx.changed() => break,
                }
            }
        });

        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Signal the loop to stop and wait for it to finish.
    pub async fn stop(mut self) {
        let _ = self.stop_tx.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }

    /// Whether the loop has terminated.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}
