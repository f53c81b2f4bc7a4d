//! Backend communication services.
//!
//! - [`api`] - fetching the normalized record array from the backend

pub mod api;

pub use api::*;
