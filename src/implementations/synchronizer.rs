use std::sync::atomic::{ AtomicU64, Ordering };
use std::sync::{ Arc, Mutex };
use std::time::Duration;

use chrono::Utc;
use log::{ debug, info, warn };
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::ClientConfig;
use crate::errors::{ ErrorInfo, FactWatchError, FactWatchResult };
use crate::models::Snapshot;
use crate::traits::fact_check_api::FactCheckApi;

/// Write side of the shared state. Only the synchronizer and its tick tasks hold it.
struct SyncState {
    snapshot: watch::Sender<Arc<Snapshot>>,
    loading: watch::Sender<bool>,
    ticks: AtomicU64,
}

/// Read-only view of the synchronizer's state, handed to consumers.
#[derive(Clone)]
pub struct SnapshotHandle {
    snapshot: watch::Receiver<Arc<Snapshot>>,
    loading: watch::Receiver<bool>,
}

impl SnapshotHandle {
    /// The latest published snapshot
    pub fn current(&self) -> Arc<Snapshot> {
        self.snapshot.borrow().clone()
    }

    /// True until the first tick has resolved, whether it succeeded or not
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Wait until a new snapshot is published after the last one seen through this handle
    pub async fn changed(&mut self) -> FactWatchResult<Arc<Snapshot>> {
        self.snapshot
            .changed().await
            .map_err(|_| FactWatchError::System("synchronizer dropped".to_string()))?;
        Ok(self.snapshot.borrow_and_update().clone())
    }
}

/// Periodically pulls claims, verifications and items and publishes them as one snapshot.
///
/// Ticks are fired on a fixed schedule and are not serialised against each
/// other: a slow tick may still be running when the next one starts, and
/// whichever finishes last publishes last. `stop` only cancels scheduling;
/// ticks already running complete on their own.
pub struct PollingSynchronizer {
    api: Arc<dyn FactCheckApi>,
    state: Arc<SyncState>,
    period: Duration,
    scheduler: Mutex<Option<JoinHandle<()>>>,
}

impl PollingSynchronizer {
    pub fn new(api: Arc<dyn FactCheckApi>, config: &ClientConfig) -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Snapshot::default()));
        let (loading, _) = watch::channel(true);
        Self {
            api,
            state: Arc::new(SyncState {
                snapshot,
                loading,
                ticks: AtomicU64::new(0),
            }),
            period: config.poll_period,
            scheduler: Mutex::new(None),
        }
    }

    pub fn handle(&self) -> SnapshotHandle {
        SnapshotHandle {
            snapshot: self.state.snapshot.subscribe(),
            loading: self.state.loading.subscribe(),
        }
    }

    /// Start ticking at the configured period
    pub fn start(&self) -> FactWatchResult<()> {
        self.start_every(self.period)
    }

    /// Start ticking every `period`, the first tick firing immediately.
    ///
    /// Calling this while already running replaces the previous schedule.
    pub fn start_every(&self, period: Duration) -> FactWatchResult<()> {
        if period.is_zero() {
            return Err(FactWatchError::InvalidInput("poll period must be greater than zero".to_string()));
        }

        let mut slot = self.scheduler.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.take() {
            debug!("Replacing running poll schedule");
            previous.abort();
        }

        let api = self.api.clone();
        let state = self.state.clone();
        info!("Polling every {} ms", period.as_millis());

        *slot = Some(
            tokio::spawn(async move {
                loop {
                    // Fire and forget: the schedule never waits for a tick to finish.
                    let api = api.clone();
                    let state = state.clone();
                    tokio::spawn(async move {
                        let _ = run_tick(api.as_ref(), &state).await;
                    });
                    tokio::time::sleep(period).await;
                }
            })
        );
        Ok(())
    }

    /// Cancel future ticks. Returns whether a schedule was running.
    pub fn stop(&self) -> bool {
        let mut slot = self.scheduler.lock().unwrap_or_else(|e| e.into_inner());
        match slot.take() {
            Some(handle) => {
                handle.abort();
                info!("Polling stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.scheduler
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    /// Run a single tick on the caller's task and wait for it
    pub async fn sync_now(&self) -> FactWatchResult<()> {
        run_tick(self.api.as_ref(), &self.state).await
    }
}

impl Drop for PollingSynchronizer {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_tick(api: &dyn FactCheckApi, state: &SyncState) -> FactWatchResult<()> {
    let tick = state.ticks.fetch_add(1, Ordering::Relaxed) + 1;
    debug!("Tick {} started", tick);

    // try_join drops the remaining reads as soon as one fails.
    let outcome = tokio::try_join!(
        api.fetch_claims(),
        api.fetch_verifications(),
        api.fetch_items()
    );

    match outcome {
        Ok((claims, verifications, items)) => {
            let next = Snapshot::synced(claims, verifications, items, Utc::now());
            let counts = next.counts();
            clear_loading(state);
            state.snapshot.send_replace(Arc::new(next));
            info!(
                "Tick {} synced: {} claims, {} verifications, {} items",
                tick,
                counts.claims,
                counts.verifications,
                counts.items
            );
            Ok(())
        }
        Err(err) => {
            warn!("Tick {} discarded: {}", tick, err);
            let error = ErrorInfo::from_error(&err);
            clear_loading(state);
            state.snapshot.send_modify(|current| {
                let next = current.with_error(error);
                *current = Arc::new(next);
            });
            Err(err)
        }
    }
}

// Cleared ahead of the publish so a consumer woken by the new snapshot never sees it as loading.
fn clear_loading(state: &SyncState) {
    state.loading.send_if_modified(|loading| std::mem::replace(loading, false));
}
