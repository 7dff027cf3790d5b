//! Relay Server - HTTP surface for cached playlists
//!
//! This crate wires the refresh workers from `relay-sync` to an Axum router
//! exposing one `GET /{key}/get.php` route per configured source, plus
//! `/health` and `/metrics`.

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod settings;
pub mod state;

pub use bootstrap::Relay;
pub use error::StartupError;
pub use handlers::health::{HealthResponse, SourceHealth};
pub use server::{create_router, create_router_with_metrics, run_server};
pub use settings::ServerSettings;
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
