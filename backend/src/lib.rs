//! # FinMetrics - financial metrics workbook API
//!
//! FinMetrics reads a spreadsheet of company financial metrics (sales,
//! EBITDA, profit-after-tax per year), reshapes the wide rows into flat
//! `{Company, Metric, Year, Value}` records and serves them as JSON.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────┐
//! │  Workbook   │────▶│   Loader    │────▶│  Normalizer │────▶│  JSON    │
//! │ (xls/xlsx)  │     │ (calamine)  │     │ (wide→long) │     │  array   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use finmetrics::{load_records, NormalizeOptions};
//!
//! let records = load_records("Financials.xlsx", &NormalizeOptions::default())?;
//! println!("{} records", records.len());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - hierarchical error types
//! - [`models`] - domain models (CellValue, Sheet, FinancialRecord)
//! - [`loader`] - workbook loading via calamine
//! - [`normalize`] - the wide-to-long transform (the core)
//! - [`pipeline`] - one-shot Loader -> Normalizer composition
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod models;

// Loading
pub mod loader;

// Normalization
pub mod normalize;

// Pipeline
pub mod pipeline;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    NormalizeError, NormalizeResult, PipelineError, PipelineResult, ServerError, ServerResult,
    WorkbookError, WorkbookResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{CellValue, FinancialRecord, Sheet, SheetLayout, YearColumn};

// =============================================================================
// Re-exports - Loader
// =============================================================================

pub use loader::{load_first_sheet, sheet_from_range};

// =============================================================================
// Re-exports - Normalizer
// =============================================================================

pub use normalize::{
    classify_headers, coerce_number, normalize_rows, normalize_sheet, NormalizeOptions,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::load_records;

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{error_response, ServerConfig};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
