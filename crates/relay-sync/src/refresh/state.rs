//! Per-worker refresh state tracking.

use std::time::{Duration, Instant};

use parking_lot::RwLock;

/// Point-in-time copy of a worker's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshSnapshot {
    /// Completed refresh cycles.
    pub cycles: u64,
    /// Failed cycles since the last successful fetch.
    pub consecutive_failures: u32,
    /// Message of the most recent failure, cleared by a successful fetch.
    pub last_error: Option<String>,
    /// When the worker last wrote a payload.
    pub last_update: Option<Instant>,
}

/// Tracks the refresh history of a single worker.
///
/// Only the owning worker records into it; everyone else reads.
#[derive(Debug, Default)]
pub struct RefreshState {
    inner: RwLock<RefreshSnapshot>,
}

impl RefreshState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cycle that wrote a payload.
    pub fn record_update(&self) {
        let mut inner = self.inner.write();
        inner.cycles += 1;
        inner.consecutive_failures = 0;
        inner.last_error = None;
        inner.last_update = Some(Instant::now());
    }

    /// Records a cycle whose fetch succeeded with nothing to write.
    pub fn record_empty(&self) {
        let mut inner = self.inner.write();
        inner.cycles += 1;
        inner.consecutive_failures = 0;
        inner.last_error = None;
    }

    /// Records a failed cycle.
    pub fn record_failure(&self, error: impl Into<String>) {
        let mut inner = self.inner.write();
        inner.cycles += 1;
        inner.consecutive_failures += 1;
        inner.last_error = Some(error.into());
    }

    /// Returns the number of completed cycles.
    pub fn cycles(&self) -> u64 {
        self.inner.read().cycles
    }

    /// Returns the number of consecutive failures.
    pub fn failure_count(&self) -> u32 {
        self.inner.read().consecutive_failures
    }

    /// Returns the last error message.
    pub fn last_error(&self) -> Option<String> {
        self.inner.read().last_error.clone()
    }

    /// Returns the time since the last payload write.
    pub fn time_since_update(&self) -> Option<Duration> {
        self.inner.read().last_update.map(|t| t.elapsed())
    }

    /// Returns a consistent copy of the whole state.
    pub fn snapshot(&self) -> RefreshSnapshot {
        self.inner.read().clone()
    }
}
