//! Error types for playlist sources.

use relay_core::RelayError;

/// Errors that can occur while fetching from a remote source.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The origin answered with a status of 400 or above.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be read.
    #[error("failed to read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be built.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The fetched document is not a valid source mapping.
    #[error("invalid source mapping: {0}")]
    Mapping(#[from] RelayError),
}

impl FetchError {
    /// Creates a status error.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Returns the HTTP status, if the origin answered with an error status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this is a transient error that might succeed on the next cycle.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::Body { .. } => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::Client(_) | Self::Mapping(_) => false,
        }
    }
}
