use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub sources: BTreeMap<String, SourceHealth>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SourceHealth {
    pub populated: bool,
    pub cycles: u64,
    pub consecutive_failures: u32,
    pub last_error: Option<String>,
    /// Whole seconds since the last payload write, `None` before the first one.
    pub last_update_secs: Option<u64>,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "UP".to_string(),
            sources: BTreeMap::new(),
        }
    }
}

impl HealthResponse {
    /// Builds the response from the current application state.
    pub fn from_state(state: &AppState) -> Self {
        let sources = state
            .sources()
            .iter()
            .map(|(key, refresh)| {
                let snapshot = refresh.snapshot();
                let health = SourceHealth {
                    populated: state.store().contains(key),
                    cycles: snapshot.cycles,
                    consecutive_failures: snapshot.consecutive_failures,
                    last_error: snapshot.last_error,
                    last_update_secs: refresh.time_since_update().map(|age| age.as_secs()),
                };
                (key.clone(), health)
            })
            .collect();

        Self {
            sources,
            ..Self::default()
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::from_state(&state))
}
