//! In-memory source that replays a fixed script.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::PlaylistSource;
use crate::error::FetchError;

/// One scripted fetch result.
#[derive(Debug, Clone)]
pub enum ScriptStep {
    /// A successful fetch; the body is normalized like an HTTP body.
    Body(&'static str),
    /// A successful fetch that yields an empty payload.
    Empty,
    /// A failed fetch with the given status.
    Status(u16),
}

/// Source that answers each fetch with the next step of its script.
///
/// Once the script runs out every fetch fails with status 503.
#[derive(Debug)]
pub struct ScriptedSource {
    steps: Mutex<VecDeque<ScriptStep>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    /// Creates a shared source that replays `steps` in order.
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into_iter().collect()),
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of fetches performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaylistSource for ScriptedSource {
    async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.steps.lock().pop_front() {
            Some(ScriptStep::Body(body)) => Ok(relay_core::normalize_playlist(body.to_string())),
            Some(ScriptStep::Empty) => Ok(String::new()),
            Some(ScriptStep::Status(status)) => Err(FetchError::status(address, status)),
            None => Err(FetchError::status(address, 503)),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
