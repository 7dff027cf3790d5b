use std::net::SocketAddr;

use axum::{Router, middleware, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use relay_core::route_path;
use tower::ServiceBuilder;
use tracing::info;

use crate::handlers::{health::health_check, metrics::metrics_handler, playlist::playlist_route};
use crate::metrics::http::http_metrics_middleware;
use crate::middleware::{LoggingLayer, RequestIdLayer};
use crate::state::AppState;

/// Builds the application routes: `/health` plus one playlist route per key.
fn app_routes<'a>(state: AppState, keys: impl IntoIterator<Item = &'a str>) -> Router {
    let mut router = Router::new().route("/health", get(health_check));

    for key in keys {
        let path = route_path(key);
        router = router.route(&path, playlist_route(key));
        info!("Added: GET {}", path);
    }

    router.with_state(state)
}

/// Applies the middleware stack shared by every route.
fn with_middleware(router: Router) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(RequestIdLayer)
        .layer(LoggingLayer);

    router
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware_stack)
}

/// Creates a router serving `keys` from the given state, without `/metrics`.
///
/// Keys must already be validated (see `relay_core::validate_key`).
pub fn create_router<'a>(state: AppState, keys: impl IntoIterator<Item = &'a str>) -> Router {
    with_middleware(app_routes(state, keys))
}

/// Creates a router serving `keys` plus the Prometheus `/metrics` endpoint.
pub fn create_router_with_metrics<'a>(
    state: AppState,
    keys: impl IntoIterator<Item = &'a str>,
    prometheus_handle: PrometheusHandle,
) -> Router {
    // Router for metrics endpoint (different state)
    let metrics_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    with_middleware(app_routes(state, keys).merge(metrics_router))
}

/// Serves `app` on `addr` until a shutdown signal arrives.
pub async fn run_server(addr: SocketAddr, app: Router) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
