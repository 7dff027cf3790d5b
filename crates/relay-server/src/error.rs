use relay_sync::FetchError;
use thiserror::Error;

/// Errors that abort startup before any route is served.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Settings could not be read from the environment.
    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),

    /// The listen address is not a valid socket address.
    #[error("invalid listen address '{0}'")]
    ListenAddress(String),

    /// The source mapping could not be fetched or decoded.
    #[error("failed to load source mapping from {url}: {source}")]
    Mapping {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The metrics recorder could not be installed.
    #[error("failed to initialize metrics: {0}")]
    Metrics(String),

    /// An I/O error occurred while binding or serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
