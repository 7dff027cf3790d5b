//! Application state.

use std::collections::BTreeMap;
use std::sync::Arc;

use relay_core::PlaylistStore;
use relay_sync::RefreshState;

/// Application state shared across all handlers.
///
/// Handlers only ever read from it: the store is written by refresh workers
/// and each `RefreshState` by its own worker.
#[derive(Clone, Default)]
pub struct AppState {
    /// Cached playlists.
    store: PlaylistStore,
    /// Refresh state per key, for the health endpoint.
    sources: Arc<BTreeMap<String, Arc<RefreshState>>>,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(store: PlaylistStore, sources: BTreeMap<String, Arc<RefreshState>>) -> Self {
        Self {
            store,
            sources: Arc::new(sources),
        }
    }

    /// Creates an AppState with no refresh state attached.
    pub fn from_store(store: PlaylistStore) -> Self {
        Self::new(store, BTreeMap::new())
    }

    /// Returns the playlist store.
    pub fn store(&self) -> &PlaylistStore {
        &self.store
    }

    /// Returns the refresh state per key.
    pub fn sources(&self) -> &BTreeMap<String, Arc<RefreshState>> {
        &self.sources
    }
}
