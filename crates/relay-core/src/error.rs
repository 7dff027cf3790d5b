//! Error types for Relay.
//!
//! Errors in this crate are raised while building the source mapping.
//! Every one of them is fatal at startup: a relay never serves routes
//! from a mapping it could not fully validate.

use thiserror::Error;

/// Result type alias for Relay core operations.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Main error type for Relay core operations.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A key cannot be used as a route segment.
    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// A key maps to an unusable source address.
    #[error("invalid source address for key '{key}': {reason}")]
    InvalidAddress { key: String, reason: String },

    /// The mapping document is not a JSON object of strings.
    #[error("failed to decode source mapping: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RelayError {
    /// Creates an invalid key error.
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid address error.
    pub fn invalid_address(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Returns the offending key, if the error concerns a single entry.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidKey { key, .. } | Self::InvalidAddress { key, .. } => Some(key),
            Self::Decode(_) => None,
        }
    }
}
