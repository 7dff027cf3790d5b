//! Playlist header normalization.

/// Header token every served playlist starts with.
pub const PLAYLIST_MARKER: &str = "#EXTM3U";

/// Returns true if `body` already starts with [`PLAYLIST_MARKER`].
///
/// The check is a literal prefix match: `#EXTAAA` or a leading BOM or
/// whitespace do not count.
pub fn has_marker(body: &str) -> bool {
    body.starts_with(PLAYLIST_MARKER)
}

/// Ensures a fetched body starts with the playlist marker.
///
/// A body that already begins with `#EXTM3U` is returned untouched; any other
/// body (including an empty one) gets a `#EXTM3U\n` line prepended. Nothing
/// else about the content is inspected.
///
/// # Example
/// ```
/// # use relay_core::normalize_playlist;
/// assert_eq!(normalize_playlist("#EXTAAA\ndata".to_string()), "#EXTM3U\n#EXTAAA\ndata");
/// assert_eq!(normalize_playlist("#EXTM3U\n#EXTINF:-1,One".to_string()), "#EXTM3U\n#EXTINF:-1,One");
/// ```
pub fn normalize_playlist(body: String) -> String {
    if has_marker(&body) {
        return body;
    }

    let mut normalized = String::with_capacity(PLAYLIST_MARKER.len() + 1 + body.len());
    normalized.push_str(PLAYLIST_MARKER);
    normalized.push('\n');
    normalized.push_str(&body);
    normalized
}
