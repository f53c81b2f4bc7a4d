//! Domain models for the FinMetrics pipeline.
//!
//! - [`CellValue`] - primitive spreadsheet cell content
//! - [`Sheet`] - one tabular page as headers plus rows of cells
//! - [`SheetLayout`] - header classification (company/metric/year columns)
//! - [`FinancialRecord`] - the normalized long-form output tuple

use serde::{Deserialize, Serialize};

// =============================================================================
// Cell Values
// =============================================================================

/// Primitive content of a single spreadsheet cell.
///
/// The loader collapses the source format's richer cell types into this
/// enum: dates become their serial number, error cells become [`Empty`].
///
/// [`Empty`]: CellValue::Empty
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Blank cell (or an error cell in the source workbook).
    Empty,
    /// Numeric cell.
    Number(f64),
    /// Text cell.
    Text(String),
    /// Boolean cell.
    Bool(bool),
}

impl CellValue {
    /// Render the cell as the string the normalizer copies into records.
    ///
    /// Text passes through verbatim (no trimming). Numbers drop a trailing
    /// `.0` so a numeric company cell reads naturally.
    pub fn display_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Text(s) => s.clone(),
            CellValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&calamine::Data> for CellValue {
    fn from(data: &calamine::Data) -> Self {
        use calamine::Data;
        match data {
            Data::Empty => CellValue::Empty,
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(_) => CellValue::Empty,
        }
    }
}

// =============================================================================
// Sheets
// =============================================================================

/// One sheet of a workbook: a header row plus data rows, in source order.
///
/// Rows are positional: cell `i` of a row belongs to header `i`. A row may
/// be shorter than the header list; missing cells read as [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Column headers from the first row, trimmed.
    pub headers: Vec<String>,
    /// Data rows, aligned with `headers`.
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Cell at `(row, column)`, or [`CellValue::Empty`] for a ragged row.
    pub fn cell<'a>(&'a self, row: &'a [CellValue], index: usize) -> &'a CellValue {
        row.get(index).unwrap_or(&CellValue::Empty)
    }
}

// =============================================================================
// Header Classification
// =============================================================================

/// A column whose header is exactly four ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearColumn {
    /// The header parsed as a calendar year.
    pub year: i32,
    /// Position in the header list.
    pub index: usize,
}

/// Result of the one-per-sheet header classification pass.
///
/// Partitions the header list into the company column, the metric column
/// and the ordered list of year columns. Headers that are none of these
/// are ignored by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// Position of the company-name column.
    pub company: usize,
    /// Position of the metric/field column.
    pub metric: usize,
    /// Year columns in header order (not sorted by year).
    pub years: Vec<YearColumn>,
}

// =============================================================================
// Financial Records
// =============================================================================

/// The normalized long-form record: one value of one metric of one company
/// in one year.
///
/// Serialized field names are PascalCase to match the HTTP contract
/// (`{"Company": ..., "Metric": ..., "Year": ..., "Value": ...}`).
/// `value` may be `f64::NAN` when the source cell could not be coerced;
/// serde_json emits `null` for non-finite floats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FinancialRecord {
    /// Company name, copied verbatim from the source row.
    pub company: String,
    /// Metric name (e.g. SALES, EBITDA, PAT), copied verbatim. The set is
    /// not enforced; any string passes through.
    pub metric: String,
    /// Calendar year from the column header.
    pub year: i32,
    /// Metric value, or the not-a-number sentinel.
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    #[test]
    fn test_cell_from_calamine_data() {
        assert_eq!(CellValue::from(&Data::Int(7)), CellValue::Number(7.0));
        assert_eq!(CellValue::from(&Data::Float(1.5)), CellValue::Number(1.5));
        assert_eq!(
            CellValue::from(&Data::String("SALES".into())),
            CellValue::Text("SALES".into())
        );
        assert_eq!(CellValue::from(&Data::Empty), CellValue::Empty);
        assert_eq!(
            CellValue::from(&Data::Error(calamine::CellErrorType::Div0)),
            CellValue::Empty
        );
    }

    #[test]
    fn test_display_string_drops_trailing_zero() {
        assert_eq!(CellValue::Number(2022.0).display_string(), "2022");
        assert_eq!(CellValue::Number(10.5).display_string(), "10.5");
        assert_eq!(CellValue::Text(" padded ".into()).display_string(), " padded ");
        assert_eq!(CellValue::Empty.display_string(), "");
    }

    #[test]
    fn test_record_serializes_pascal_case() {
        let record = FinancialRecord {
            company: "Infosys Ltd.".into(),
            metric: "SALES".into(),
            year: 2022,
            value: 100.0,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Company"], "Infosys Ltd.");
        assert_eq!(json["Metric"], "SALES");
        assert_eq!(json["Year"], 2022);
        assert_eq!(json["Value"], 100.0);
    }

    #[test]
    fn test_nan_value_serializes_as_null() {
        let record = FinancialRecord {
            company: "Wipro Ltd.".into(),
            metric: "PAT".into(),
            year: 2023,
            value: f64::NAN,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["Value"].is_null());
    }

    #[test]
    fn test_ragged_row_reads_empty() {
        let sheet = Sheet {
            headers: vec!["a".into(), "b".into()],
            rows: vec![vec![CellValue::Number(1.0)]],
        };
        let row = &sheet.rows[0];
        assert_eq!(sheet.cell(row, 0), &CellValue::Number(1.0));
        assert_eq!(sheet.cell(row, 1), &CellValue::Empty);
    }
}
