//! Test helpers para relay-server.

#![allow(dead_code, unused_imports)]

pub mod client;
pub mod sources;

pub use client::{TestClient, TestResponse, client_with_store};
pub use sources::{ScriptedSource, Step, spawn_origin};
