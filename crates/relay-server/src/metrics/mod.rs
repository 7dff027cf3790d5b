//! Metrics module for Relay Server.

pub mod http;
pub mod setup;

pub use setup::init_metrics;
