//! One-time startup wiring: workers and routes from a source mapping.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use relay_core::{PlaylistStore, SourceMapping};
use relay_sync::{
    HttpSource, PlaylistSource, RefreshConfig, RefreshHandle, RefreshWorker, load_mapping,
};
use tracing::info;

use crate::error::StartupError;
use crate::server::{create_router, create_router_with_metrics};
use crate::state::AppState;

/// A running relay: one refresh worker per configured key and the state
/// their routes read from.
///
/// Workers run until [`Relay::shutdown`] is called or the relay is dropped.
pub struct Relay {
    state: AppState,
    keys: Vec<String>,
    handles: Vec<RefreshHandle>,
}

impl Relay {
    /// Spawns one refresh worker per mapping entry.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(
        mapping: &SourceMapping,
        source: Arc<dyn PlaylistSource>,
        store: PlaylistStore,
        config: RefreshConfig,
    ) -> Self {
        let handles: Vec<RefreshHandle> = mapping
            .iter()
            .map(|(key, address)| {
                RefreshWorker::new(key, address, Arc::clone(&source), store.clone())
                    .with_config(config.clone())
                    .start()
            })
            .collect();

        let sources: BTreeMap<String, _> = handles
            .iter()
            .map(|handle| (handle.key().to_string(), Arc::clone(handle.state())))
            .collect();

        info!(workers = handles.len(), "Refresh workers started");

        Self {
            state: AppState::new(store, sources),
            keys: mapping.keys().map(String::from).collect(),
            handles,
        }
    }

    /// Fetches the mapping from `mapping_url` over HTTP and starts the relay.
    ///
    /// Any failure to obtain or decode the mapping is returned before a
    /// single worker is spawned.
    pub async fn bootstrap(mapping_url: &str, config: RefreshConfig) -> Result<Self, StartupError> {
        let source = HttpSource::new().map_err(|source| StartupError::Mapping {
            url: mapping_url.to_string(),
            source,
        })?;

        let mapping = load_mapping(&source, mapping_url)
            .await
            .map_err(|source| StartupError::Mapping {
                url: mapping_url.to_string(),
                source,
            })?;

        Ok(Self::start(
            &mapping,
            Arc::new(source),
            PlaylistStore::new(),
            config,
        ))
    }

    /// Returns the shared application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the configured keys in mapping order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Builds the router for this relay.
    pub fn router(&self) -> Router {
        create_router(self.state.clone(), self.keys.iter().map(String::as_str))
    }

    /// Builds the router for this relay, including `/metrics`.
    pub fn router_with_metrics(&self, prometheus_handle: PrometheusHandle) -> Router {
        create_router_with_metrics(
            self.state.clone(),
            self.keys.iter().map(String::as_str),
            prometheus_handle,
        )
    }

    /// Stops every refresh worker.
    pub fn shutdown(self) {
        for handle in &self.handles {
            handle.stop();
        }
        info!(workers = self.handles.len(), "Refresh workers stopped");
    }
}
