//! HTTP API layer.
//!
//! - [`server`] - axum router and entry point
//! - [`types`] - configuration and response helpers

pub mod server;
pub mod types;
