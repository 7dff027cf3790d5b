//! Keyed playlist store shared by refresh workers and HTTP handlers.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Last known good payload per key.
///
/// A single reader/writer lock guards the whole map. Readers share the lock
/// and never serialize with each other; a writer excludes everyone for the
/// duration of one map assignment. `parking_lot`'s lock is writer-fair, so a
/// steady stream of readers cannot starve a refresh.
///
/// Payloads are stored as `Arc<str>`: a read clones a pointer under the lock
/// and the body is written out after the lock is released. A reader therefore
/// sees either the previous payload or the new one in full.
///
/// There is no eviction, size bound or expiry. Cloning the store shares the
/// same map.
///
/// # Examples
///
/// ```
/// use relay_core::PlaylistStore;
///
/// let store = PlaylistStore::new();
/// assert_eq!(&*store.get("news"), "");
///
/// store.set("news", "#EXTM3U\n#EXTINF:-1,One");
/// assert_eq!(&*store.get("news"), "#EXTM3U\n#EXTINF:-1,One");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    entries: Arc<RwLock<HashMap<String, Arc<str>>>>,
}

impl PlaylistStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the payload for `key`, or an empty string if it was never set.
    pub fn get(&self, key: &str) -> Arc<str> {
        self.lookup(key).unwrap_or_else(|| Arc::from(""))
    }

    /// Returns the payload for `key`, or `None` if it was never set.
    pub fn lookup(&self, key: &str) -> Option<Arc<str>> {
        self.entries.read().get(key).cloned()
    }

    /// Overwrites the payload for `key`.
    pub fn set(&self, key: impl Into<String>, payload: impl Into<Arc<str>>) {
        let key = key.into();
        let payload = payload.into();
        self.entries.write().insert(key, payload);
    }

    /// Returns true if `key` has ever been set.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Returns the number of populated keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if no key has been populated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
