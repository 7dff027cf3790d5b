//! Playlist source abstractions.

mod http;
#[cfg(any(test, feature = "test-util"))]
mod scripted;
mod traits;

pub use http::HttpSource;
#[cfg(any(test, feature = "test-util"))]
pub use scripted::{ScriptStep, ScriptedSource};
pub use traits::PlaylistSource;
