//! Playlist endpoint handlers.

use std::sync::Arc;

use axum::{extract::State, routing::MethodRouter, routing::get};
use relay_core::PlaylistStore;
use tracing::instrument;

use crate::state::AppState;

/// Renders the response body for `key`.
///
/// A populated key yields its payload followed by a newline. A key that was
/// never populated yields an empty body.
pub fn playlist_body(store: &PlaylistStore, key: &str) -> String {
    match store.lookup(key) {
        Some(payload) if !payload.is_empty() => {
            let mut body = String::with_capacity(payload.len() + 1);
            body.push_str(&payload);
            body.push('\n');
            body
        },
        _ => String::new(),
    }
}

/// Handler for GET /{key}/get.php.
#[instrument(skip_all, fields(key = %key))]
pub async fn get_playlist(state: AppState, key: Arc<str>) -> String {
    let body = playlist_body(state.store(), &key);

    tracing::debug!(bytes = body.len(), "Serving playlist");
    body
}

/// Builds the GET route serving `key`.
///
/// The key is bound into the handler when the route is built, so every
/// route reads only its own entry.
pub fn playlist_route(key: &str) -> MethodRouter<AppState> {
    let key: Arc<str> = Arc::from(key);

    get(move |State(state): State<AppState>| get_playlist(state, Arc::clone(&key)))
}
