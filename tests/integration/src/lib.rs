//! Integration test support
//!
//! Spawns the full API server over the in-memory store and drives it with a
//! real HTTP client. No external services are required.

pub mod fixtures;
pub mod helpers;

pub use helpers::{assert_json, assert_status, TestServer};
