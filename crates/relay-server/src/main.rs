//! Relay Server binary.

use anyhow::Context;
use relay_server::{Relay, ServerSettings, metrics::init_metrics, run_server};
use relay_sync::RefreshConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = ServerSettings::from_env().context("failed to load settings")?;
    let addr = settings.socket_addr()?;

    tracing::info!("Starting Relay Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Source mapping: {}", settings.gist_url);

    let prometheus_handle = init_metrics()?;

    // Loading the mapping is the only fatal step after settings
    let relay = Relay::bootstrap(&settings.gist_url, RefreshConfig::default()).await?;
    let app = relay.router_with_metrics(prometheus_handle);

    run_server(addr, app).await?;

    relay.shutdown();
    Ok(())
}
