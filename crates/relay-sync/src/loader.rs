//! Startup loading of the source mapping.

use relay_core::SourceMapping;
use tracing::{error, info};

use crate::error::FetchError;
use crate::source::HttpSource;

/// Fetches and decodes the source mapping published at `url`.
///
/// The document must be a JSON object whose values are strings. Any failure
/// here is meant to abort startup.
pub async fn load_mapping(source: &HttpSource, url: &str) -> Result<SourceMapping, FetchError> {
    let body = source.get_text(url).await?;
    let mapping = SourceMapping::from_json(&body).inspect_err(|e| match e.key() {
        Some(key) => error!(url, key, "Rejected source mapping entry: {}", e),
        None => error!(url, "Rejected source mapping: {}", e),
    })?;

    info!(sources = mapping.len(), "Loaded source mapping");
    Ok(mapping)
}
