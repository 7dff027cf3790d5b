//! Relay Core - Domain types
//!
//! This crate provides the foundational types for the Relay server:
//!
//! - [`SourceMapping`]: the immutable key to source address table read at startup
//! - [`normalize_playlist`]: the `#EXTM3U` header rule applied to fetched bodies
//! - [`PlaylistStore`]: the shared keyed store that workers write and handlers read

pub mod error;
pub mod mapping;
pub mod playlist;
pub mod store;

pub use error::{RelayError, Result};
pub use mapping::{SourceMapping, route_path, validate_key};
pub use playlist::{PLAYLIST_MARKER, has_marker, normalize_playlist};
pub use store::PlaylistStore;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
