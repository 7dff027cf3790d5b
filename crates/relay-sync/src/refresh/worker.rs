//! Per-key refresh worker.

use std::sync::Arc;
use std::time::Duration;

use relay_core::PlaylistStore;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

use super::RefreshState;
use super::metrics::{record_cycle, record_store_entries};
use crate::error::FetchError;
use crate::source::PlaylistSource;

/// Interval between refresh cycles.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Configuration for a refresh worker.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Interval between refresh cycles, measured from worker start.
    ///
    /// Must be non-zero; [`RefreshWorker::with_config`] replaces a zero
    /// interval with the default.
    pub interval: Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

/// Result of a single refresh cycle.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// A non-empty payload was written to the store.
    Updated {
        /// Size of the written payload.
        bytes: usize,
    },
    /// The fetch succeeded but returned nothing; the store was left alone.
    Empty,
    /// The fetch failed; the store was left alone.
    Failed(FetchError),
}

impl RefreshOutcome {
    /// Returns the metric label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Updated { .. } => "updated",
            Self::Empty => "empty",
            Self::Failed(_) => "failed",
        }
    }

    /// Returns true if the store was written.
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// Handle for controlling a running refresh worker.
///
/// Dropping the handle stops the worker.
pub struct RefreshHandle {
    /// Key the worker refreshes.
    key: Arc<str>,
    /// The worker's state.
    state: Arc<RefreshState>,
    /// Sender to signal shutdown.
    shutdown_tx: watch::Sender<bool>,
}

impl RefreshHandle {
    /// Returns the key the worker refreshes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the worker's state.
    pub fn state(&self) -> &Arc<RefreshState> {
        &self.state
    }

    /// Signals the worker to stop.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Background worker that keeps one key of the store fresh.
///
/// Every worker owns its key and source address. Nothing is shared with
/// other workers except the store, so a failing source only ever affects
/// its own key.
pub struct RefreshWorker {
    /// Key written in the store.
    key: Arc<str>,
    /// Source address fetched every cycle.
    address: Arc<str>,
    /// Source used to fetch.
    source: Arc<dyn PlaylistSource>,
    /// Shared store.
    store: PlaylistStore,
    /// The worker's state.
    state: Arc<RefreshState>,
    /// Configuration.
    config: RefreshConfig,
}

impl RefreshWorker {
    /// Creates a worker with the default configuration.
    pub fn new(
        key: impl Into<Arc<str>>,
        address: impl Into<Arc<str>>,
        source: Arc<dyn PlaylistSource>,
        store: PlaylistStore,
    ) -> Self {
        Self {
            key: key.into(),
            address: address.into(),
            source,
            store,
            state: Arc::new(RefreshState::new()),
            config: RefreshConfig::default(),
        }
    }

    /// Replaces the configuration.
    ///
    /// A zero interval cannot drive a timer, so it falls back to
    /// [`DEFAULT_REFRESH_INTERVAL`].
    pub fn with_config(mut self, config: RefreshConfig) -> Self {
        if config.interval.is_zero() {
            warn!(key = %self.key, "Zero refresh interval, using {:?}", DEFAULT_REFRESH_INTERVAL);
            self.config = RefreshConfig::default();
        } else {
            self.config = config;
        }
        self
    }

    /// Returns the interval between refresh cycles.
    pub fn interval(&self) -> Duration {
        self.config.interval
    }

    /// Returns the worker's state.
    pub fn state(&self) -> &Arc<RefreshState> {
        &self.state
    }

    /// Starts the background refresh task.
    ///
    /// Returns a handle that can be used to stop the worker.
    pub fn start(self) -> RefreshHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = RefreshHandle {
            key: Arc::clone(&self.key),
            state: Arc::clone(&self.state),
            shutdown_tx,
        };

        tokio::spawn(self.run(shutdown_rx));

        handle
    }

    /// Runs the refresh loop until stopped.
    ///
    /// The first cycle runs one full interval after start.
    async fn run(self, mut shutdown_rx: watch::Receiver<bool>) {
        let period = self.config.interval;
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            key = %self.key,
            address = %self.address,
            "Starting refresh worker with interval {:?}",
            period
        );

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    self.refresh_once().await;
                }
                result = shutdown_rx.changed() => {
                    if result.is_err() || *shutdown_rx.borrow() {
                        info!(key = %self.key, "Refresh worker shutting down");
                        break;
                    }
                }
            }
        }
    }

    /// Performs a single fetch, validate and write cycle.
    ///
    /// Only a successful, non-empty fetch touches the store; failures and
    /// empty payloads leave the previous value in place.
    pub async fn refresh_once(&self) -> RefreshOutcome {
        let start = std::time::Instant::now();

        let outcome = match self.source.fetch(&self.address).await {
            Ok(payload) if payload.is_empty() => {
                self.state.record_empty();
                debug!(key = %self.key, "Refresh returned an empty payload, keeping cached value");
                RefreshOutcome::Empty
            },
            Ok(payload) => {
                let bytes = payload.len();
                self.store.set(&*self.key, payload);
                self.state.record_update();
                record_store_entries(self.store.len());
                debug!(key = %self.key, bytes, "Refresh successful");
                RefreshOutcome::Updated { bytes }
            },
            Err(e) => {
                self.state.record_failure(e.to_string());
                warn!(
                    key = %self.key,
                    source = self.source.name(),
                    transient = e.is_transient(),
                    "Refresh failed: {}",
                    e
                );
                RefreshOutcome::Failed(e)
            },
        };

        record_cycle(&self.key, &outcome, start.elapsed());
        outcome
    }
}
