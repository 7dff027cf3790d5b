//! Background refresh of cached playlists.
//!
//! Each configured key gets its own [`RefreshWorker`], which fetches the key's
//! source on a fixed schedule and writes successful results into the shared
//! store. Workers share nothing but the store.

pub mod metrics;
mod state;
mod worker;

pub use state::{RefreshSnapshot, RefreshState};
pub use worker::{
    DEFAULT_REFRESH_INTERVAL, RefreshConfig, RefreshHandle, RefreshOutcome, RefreshWorker,
};
