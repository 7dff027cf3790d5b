//! Metrics setup and initialization.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

use super::http::register_http_metrics;
use crate::error::StartupError;

/// Histogram buckets in seconds, from 100 microseconds up to 30 seconds.
const BUCKETS: &[f64] = &[
    0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    30.0,
];

/// Inicializa el sistema de metricas y retorna el handle para el endpoint.
pub fn init_metrics() -> Result<PrometheusHandle, StartupError> {
    let handle = PrometheusBuilder::new()
        .set_buckets(BUCKETS)
        .map_err(|e| StartupError::Metrics(e.to_string()))?
        .install_recorder()
        .map_err(|e| StartupError::Metrics(e.to_string()))?;

    register_http_metrics();
    relay_sync::refresh::metrics::describe_refresh_metrics();

    info!("Metrics system initialized");
    Ok(handle)
}
