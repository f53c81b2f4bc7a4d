//! REST API types shared by the server and its tests.

use std::path::PathBuf;

use serde_json::{json, Value};

use crate::normalize::NormalizeOptions;

/// Server configuration, cloned into each request handler.
///
/// Request-scoped by design: handlers read the workbook fresh on every
/// call and keep nothing across invocations.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Workbook file served by `/api/data`, relative to the working
    /// directory unless absolute.
    pub workbook_path: PathBuf,
    /// Reserved column headers.
    pub options: NormalizeOptions,
    /// Optional directory of built frontend assets to serve at `/`.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            workbook_path: PathBuf::from("Financials.xlsx"),
            options: NormalizeOptions::default(),
            static_dir: None,
        }
    }
}

/// The generic 500 body for any loader/normalizer failure.
///
/// Deliberately opaque; the underlying cause is logged server-side only.
pub fn error_response() -> Value {
    json!({ "error": "Error processing data file." })
}
