//! HTTP playlist source backed by reqwest.

use async_trait::async_trait;
use relay_core::normalize_playlist;
use reqwest::Client;
use tracing::{debug, trace};

use super::PlaylistSource;
use crate::error::FetchError;

/// Fetches playlists over HTTP.
///
/// Only the transport's default timeouts apply. Status codes of 400 and
/// above are failures; the body of a failed response is discarded.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Creates a new source with the default client configuration.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(Self::default_user_agent())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// Creates a source around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Returns the default user agent string.
    pub fn default_user_agent() -> String {
        format!("relay/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Performs a GET and returns the raw body as text.
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        trace!(url, "Sending request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(FetchError::status(url, status.as_u16()));
        }

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        debug!(url, status = status.as_u16(), bytes = body.len(), "Fetched");
        Ok(body)
    }
}

#[async_trait]
impl PlaylistSource for HttpSource {
    async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        let body = self.get_text(address).await?;
        Ok(normalize_playlist(body))
    }

    fn name(&self) -> &str {
        "http"
    }
}
