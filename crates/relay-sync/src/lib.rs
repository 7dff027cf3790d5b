//! # Relay Sync
//!
//! Playlist sources and background refresh for the Relay server.
//!
//! ## Features
//!
//! - Async trait-based playlist source abstraction
//! - HTTP source backed by `reqwest`, with `#EXTM3U` normalization
//! - One independent refresh worker per key, on a fixed 30 second cadence
//! - A single refresh cycle callable on its own, for deterministic tests
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use relay_core::PlaylistStore;
//! use relay_sync::{HttpSource, RefreshConfig, RefreshWorker};
//!
//! let store = PlaylistStore::new();
//! let source = Arc::new(HttpSource::new()?);
//!
//! let handle = RefreshWorker::new("news", "http://src/news.m3u", source, store.clone())
//!     .with_config(RefreshConfig::default())
//!     .start();
//! ```

pub mod error;
pub mod loader;
pub mod refresh;
pub mod source;

// Re-exports
pub use error::FetchError;
pub use loader::load_mapping;
pub use refresh::{RefreshConfig, RefreshHandle, RefreshOutcome, RefreshState, RefreshWorker};
pub use source::{HttpSource, PlaylistSource};

// Re-export relay_core for consumers
pub use relay_core;
