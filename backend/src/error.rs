//! Error types for the FinMetrics pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`WorkbookError`] - spreadsheet loading errors
//! - [`NormalizeError`] - header classification errors
//! - [`PipelineError`] - top-level orchestration errors
//! - [`ServerError`] - HTTP server errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Workbook Loading Errors
// =============================================================================

/// Errors while loading a workbook file.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// Failed to read the file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not a readable workbook.
    #[error("Invalid workbook: {0}")]
    InvalidWorkbook(#[from] calamine::Error),

    /// The workbook contains no sheets.
    #[error("Workbook has no sheets")]
    NoSheets,

    /// The first sheet has no header row.
    #[error("Sheet has no header row")]
    NoHeaders,
}

// =============================================================================
// Normalization Errors
// =============================================================================

/// Errors during header classification.
///
/// The transform itself never fails: coercion problems degrade to the
/// not-a-number sentinel. Classification fails only when a reserved
/// column is absent from the sheet.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A reserved column (company name or metric) is missing.
    #[error("Missing required column: '{0}'")]
    MissingColumn(String),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::pipeline::load_records`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Workbook loading error.
    #[error("Workbook error: {0}")]
    Workbook(#[from] WorkbookError),

    /// Normalization error.
    #[error("Normalize error: {0}")]
    Normalize(#[from] NormalizeError),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Failed to bind or serve.
    #[error("Server IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for workbook loading.
pub type WorkbookResult<T> = Result<T, WorkbookError>;

/// Result type for normalization.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
