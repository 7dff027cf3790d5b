use crate::error::{RelayError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Characters a key may not contain, since it is used verbatim as a route segment.
const FORBIDDEN_KEY_CHARS: &[char] = &['/', '{', '}', '?', '#', '%'];

/// The immutable key to source address table read once at startup.
///
/// The JSON form is a flat object of strings:
///
/// ```json
/// { "news": "http://src/news.m3u", "sports": "http://src/sports.m3u" }
/// ```
///
/// `IndexMap` keeps the document order so startup logs and route registration
/// are deterministic. Lookups never depend on that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SourceMapping {
    inner: IndexMap<String, String>,
}

impl SourceMapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// Decodes and validates a mapping from a JSON document.
    ///
    /// # Example
    /// ```
    /// # use relay_core::SourceMapping;
    /// let mapping = SourceMapping::from_json(r#"{"news":"http://src/news.m3u"}"#).unwrap();
    /// assert_eq!(mapping.get("news"), Some("http://src/news.m3u"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let mapping: Self = serde_json::from_str(json)?;
        mapping.validate()?;
        Ok(mapping)
    }

    /// Builds and validates a mapping from `(key, address)` pairs.
    ///
    /// A repeated key keeps the last address, as a repeated JSON member would.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let inner = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let mapping = Self { inner };
        mapping.validate()?;
        Ok(mapping)
    }

    /// Checks every entry, failing on the first unusable one.
    pub fn validate(&self) -> Result<()> {
        for (key, address) in &self.inner {
            validate_key(key)?;
            if address.trim().is_empty() {
                return Err(RelayError::invalid_address(key, "address is empty"));
            }
        }
        Ok(())
    }

    /// Returns the source address for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Iterates over `(key, address)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over the keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Returns the number of configured sources.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if no sources are configured.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Validates that `key` can be registered as a literal route segment.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(RelayError::invalid_key(key, "key is empty"));
    }

    if let Some(c) = key
        .chars()
        .find(|c| FORBIDDEN_KEY_CHARS.contains(c) || c.is_whitespace() || c.is_control())
    {
        return Err(RelayError::invalid_key(
            key,
            format!("contains forbidden character {:?}", c),
        ));
    }

    if key.starts_with(':') || key.starts_with('*') {
        return Err(RelayError::invalid_key(
            key,
            "must not start with ':' or '*'",
        ));
    }

    Ok(())
}

/// Returns the route serving `key`, e.g. `/news/get.php`.
pub fn route_path(key: &str) -> String {
    format!("/{}/get.php", key)
}
