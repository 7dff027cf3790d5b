//! Playlist source trait definition.

use async_trait::async_trait;

use crate::error::FetchError;

/// A source of playlist payloads.
///
/// Refresh workers only see this trait, so they can be driven by an
/// in-memory source in tests and by [`HttpSource`](super::HttpSource) in
/// production.
///
/// # Example
///
/// ```ignore
/// use relay_sync::{FetchError, PlaylistSource};
///
/// struct StaticSource(&'static str);
///
/// #[async_trait]
/// impl PlaylistSource for StaticSource {
///     async fn fetch(&self, _address: &str) -> Result<String, FetchError> {
///         Ok(self.0.to_string())
///     }
///
///     fn name(&self) -> &str {
///         "static"
///     }
/// }
/// ```
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Performs a single fetch of `address` and returns the normalized payload.
    ///
    /// Implementations must not retry: a failed fetch is reported once and the
    /// caller decides when to try again.
    ///
    /// # Errors
    ///
    /// - `FetchError::Transport` if the origin could not be reached
    /// - `FetchError::Status` if the origin answered with status 400 or above
    /// - `FetchError::Body` if the response body could not be read
    async fn fetch(&self, address: &str) -> Result<String, FetchError>;

    /// Returns the name of this source, used for logging.
    fn name(&self) -> &str;
}
