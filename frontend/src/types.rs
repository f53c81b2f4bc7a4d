//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - backend response structures
//! - **Chart Types** - chart-ready projections
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// API Response Types
// =============================================================================

/// One normalized record from the backend.
///
/// Field names are PascalCase on the wire. `value` is `None` when the
/// backend emitted the not-a-number sentinel (serialized as JSON null).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FinancialRecord {
    /// Company name.
    pub company: String,
    /// Metric name (SALES, EBITDA, PAT).
    pub metric: String,
    /// Calendar year.
    pub year: i32,
    /// Metric value in millions USD, or `None` for an unparsable cell.
    pub value: Option<f64>,
}

// =============================================================================
// Chart Types
// =============================================================================

/// A record projected to the (year, value) pair the chart draws.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub year: i32,
    pub value: Option<f64>,
}

impl From<&FinancialRecord> for ChartPoint {
    fn from(record: &FinancialRecord) -> Self {
        Self {
            year: record.year,
            value: record.value,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Network/HTTP error (including non-success status).
    Network(String),
    /// Response body could not be decoded.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Failed to fetch data: {}", msg),
            AppError::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_pascal_case() {
        let json = r#"{"Company":"Infosys Ltd.","Metric":"SALES","Year":2022,"Value":100.5}"#;
        let record: FinancialRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.company, "Infosys Ltd.");
        assert_eq!(record.metric, "SALES");
        assert_eq!(record.year, 2022);
        assert_eq!(record.value, Some(100.5));
    }

    #[test]
    fn test_null_value_deserializes_to_none() {
        let json = r#"{"Company":"Wipro Ltd.","Metric":"PAT","Year":2023,"Value":null}"#;
        let record: FinancialRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.value, None);
    }

    #[test]
    fn test_chart_point_projection() {
        let record = FinancialRecord {
            company: "Infosys Ltd.".into(),
            metric: "SALES".into(),
            year: 2022,
            value: Some(100.0),
        };
        let point = ChartPoint::from(&record);
        assert_eq!(point.year, 2022);
        assert_eq!(point.value, Some(100.0));
    }
}
