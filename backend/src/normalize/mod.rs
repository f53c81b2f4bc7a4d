//! Record normalizer: wide sheet to long-form records.
//!
//! This is the core transform of the service. A sheet arrives wide (one
//! row per company+metric, one column per year) and leaves as a flat
//! sequence of [`FinancialRecord`]s, one per (row, year-column) pair.
//!
//! Headers are classified once per sheet, not per row: the company and
//! metric columns are located, and every header matching exactly four
//! ASCII digits becomes a year column. All other columns are ignored.
//! The transform is pure and stateless; coercion failures degrade to the
//! not-a-number sentinel instead of dropping records.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{NormalizeError, NormalizeResult};
use crate::models::{CellValue, FinancialRecord, Sheet, SheetLayout, YearColumn};

/// Strict four-ASCII-digit-year pattern. No partial matches: "22",
/// "20223" and "20a3" are never years, and neither are non-ASCII digits
/// (`\d` would match any Unicode decimal digit).
static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("valid regex"));

/// Longest leading float prefix, parseFloat-style: optional sign, digits,
/// fraction, exponent. Anchored so "abc" matches nothing.
static FLOAT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?").expect("valid regex"));

/// Names of the two reserved columns.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Header of the company-name column.
    pub company_header: String,
    /// Header of the metric/field column.
    pub metric_header: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            company_header: "Company name".to_string(),
            metric_header: "Field".to_string(),
        }
    }
}

/// Partition a header list into company, metric and year columns.
///
/// One pass per sheet. Year columns keep header order, not numeric order.
/// A sheet without the company or metric column fails the whole request
/// rather than silently producing records with absent fields.
pub fn classify_headers(
    headers: &[String],
    options: &NormalizeOptions,
) -> NormalizeResult<SheetLayout> {
    let company = headers
        .iter()
        .position(|h| h == &options.company_header)
        .ok_or_else(|| NormalizeError::MissingColumn(options.company_header.clone()))?;

    let metric = headers
        .iter()
        .position(|h| h == &options.metric_header)
        .ok_or_else(|| NormalizeError::MissingColumn(options.metric_header.clone()))?;

    let years = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| YEAR_PATTERN.is_match(h))
        .map(|(index, h)| YearColumn {
            // The pattern guarantees four ASCII digits, so the parse
            // cannot fail.
            year: h.parse().expect("four-digit header"),
            index,
        })
        .collect();

    Ok(SheetLayout { company, metric, years })
}

/// Coerce a cell to a numeric value.
///
/// Numbers pass through; text is trimmed and its longest leading float
/// prefix is parsed, so "100 USD" coerces to 100 while "abc" does not.
/// Anything without a numeric prefix (empty, boolean, plain text) is the
/// not-a-number sentinel.
pub fn coerce_number(cell: &CellValue) -> f64 {
    match cell {
        CellValue::Number(n) => *n,
        CellValue::Text(s) => parse_leading_float(s.trim()),
        CellValue::Empty | CellValue::Bool(_) => f64::NAN,
    }
}

fn parse_leading_float(s: &str) -> f64 {
    FLOAT_PREFIX
        .find(s)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(f64::NAN)
}

/// Normalize a sheet into flat records.
///
/// Emits exactly one record per (row, year-column) pair, preserving row
/// order then year-column order. Company and metric are copied verbatim
/// from each row into every record derived from it; a ragged row yields
/// an explicit empty string for a missing cell. No record is ever dropped
/// because of an unparsable value.
pub fn normalize_sheet(
    sheet: &Sheet,
    options: &NormalizeOptions,
) -> NormalizeResult<Vec<FinancialRecord>> {
    let layout = classify_headers(&sheet.headers, options)?;
    Ok(normalize_rows(sheet, &layout))
}

/// Normalize rows against an already-classified layout.
pub fn normalize_rows(sheet: &Sheet, layout: &SheetLayout) -> Vec<FinancialRecord> {
    let mut records = Vec::with_capacity(sheet.rows.len() * layout.years.len());

    for row in &sheet.rows {
        let company = sheet.cell(row, layout.company).display_string();
        let metric = sheet.cell(row, layout.metric).display_string();

        for year_col in &layout.years {
            records.push(FinancialRecord {
                company: company.clone(),
                metric: metric.clone(),
                year: year_col.year,
                value: coerce_number(sheet.cell(row, year_col.index)),
            });
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn sample_sheet() -> Sheet {
        Sheet {
            headers: vec![
                "Company name".into(),
                "Field".into(),
                "2022".into(),
                "2023".into(),
                "note".into(),
            ],
            rows: vec![vec![
                text("Infosys Ltd."),
                text("SALES"),
                text("100"),
                text("110"),
                text("x"),
            ]],
        }
    }

    #[test]
    fn test_emits_one_record_per_year_column() {
        let records = normalize_sheet(&sample_sheet(), &NormalizeOptions::default()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].company, "Infosys Ltd.");
        assert_eq!(records[0].metric, "SALES");
        assert_eq!(records[0].year, 2022);
        assert_eq!(records[0].value, 100.0);
        assert_eq!(records[1].year, 2023);
        assert_eq!(records[1].value, 110.0);
    }

    #[test]
    fn test_non_year_keys_never_qualify() {
        let headers: Vec<String> = vec![
            "Company name".into(),
            "Field".into(),
            "22".into(),
            "20223".into(),
            "20a3".into(),
            "2022 ".into(),
        ];
        let layout = classify_headers(&headers, &NormalizeOptions::default()).unwrap();
        assert!(layout.years.is_empty());
    }

    #[test]
    fn test_non_ascii_digit_header_ignored() {
        // Four Arabic-Indic digits look year-like but are not a header
        // this system accepts; they must not classify, let alone panic.
        let headers: Vec<String> = vec![
            "Company name".into(),
            "Field".into(),
            "\u{662}\u{660}\u{662}\u{662}".into(),
        ];
        let layout = classify_headers(&headers, &NormalizeOptions::default()).unwrap();
        assert!(layout.years.is_empty());

        let sheet = Sheet {
            headers,
            rows: vec![vec![text("Infosys Ltd."), text("SALES"), text("100")]],
        };
        let records = normalize_sheet(&sheet, &NormalizeOptions::default()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_year_columns_keep_header_order() {
        let headers: Vec<String> = vec![
            "Company name".into(),
            "Field".into(),
            "2023".into(),
            "2021".into(),
            "2022".into(),
        ];
        let layout = classify_headers(&headers, &NormalizeOptions::default()).unwrap();
        let years: Vec<i32> = layout.years.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2023, 2021, 2022]);
    }

    #[test]
    fn test_unparsable_cell_keeps_record_with_nan() {
        let mut sheet = sample_sheet();
        sheet.rows[0][2] = text("abc");

        let records = normalize_sheet(&sheet, &NormalizeOptions::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].value.is_nan());
        assert_eq!(records[1].value, 110.0);
    }

    #[test]
    fn test_row_order_preserved() {
        let mut sheet = sample_sheet();
        sheet.rows.push(vec![
            text("Wipro Ltd."),
            text("EBITDA"),
            text("50"),
            text("55"),
            text(""),
        ]);

        let records = normalize_sheet(&sheet, &NormalizeOptions::default()).unwrap();
        let companies: Vec<&str> = records.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(
            companies,
            vec!["Infosys Ltd.", "Infosys Ltd.", "Wipro Ltd.", "Wipro Ltd."]
        );
    }

    #[test]
    fn test_record_count_is_rows_times_year_columns() {
        let mut sheet = sample_sheet();
        for i in 0..9 {
            sheet.rows.push(vec![
                text(&format!("Company {i}")),
                text("PAT"),
                text("1"),
                text("2"),
                text(""),
            ]);
        }

        let records = normalize_sheet(&sheet, &NormalizeOptions::default()).unwrap();
        assert_eq!(records.len(), 10 * 2);
    }

    #[test]
    fn test_idempotent() {
        let sheet = sample_sheet();
        let options = NormalizeOptions::default();
        let first = normalize_sheet(&sheet, &options).unwrap();
        let second = normalize_sheet(&sheet, &options).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.company, b.company);
            assert_eq!(a.metric, b.metric);
            assert_eq!(a.year, b.year);
            assert!(a.value == b.value || (a.value.is_nan() && b.value.is_nan()));
        }
    }

    #[test]
    fn test_missing_company_column_fails() {
        let sheet = Sheet {
            headers: vec!["Field".into(), "2022".into()],
            rows: vec![vec![text("SALES"), text("100")]],
        };
        let err = normalize_sheet(&sheet, &NormalizeOptions::default()).unwrap_err();
        assert!(matches!(err, NormalizeError::MissingColumn(ref c) if c == "Company name"));
    }

    #[test]
    fn test_missing_metric_column_fails() {
        let sheet = Sheet {
            headers: vec!["Company name".into(), "2022".into()],
            rows: vec![],
        };
        let err = normalize_sheet(&sheet, &NormalizeOptions::default()).unwrap_err();
        assert!(matches!(err, NormalizeError::MissingColumn(ref c) if c == "Field"));
    }

    #[test]
    fn test_ragged_row_gets_empty_strings_and_nan() {
        let sheet = Sheet {
            headers: vec!["Company name".into(), "Field".into(), "2022".into()],
            rows: vec![vec![text("HCL Technologies Ltd.")]],
        };
        let records = normalize_sheet(&sheet, &NormalizeOptions::default()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].company, "HCL Technologies Ltd.");
        assert_eq!(records[0].metric, "");
        assert!(records[0].value.is_nan());
    }

    #[test]
    fn test_company_and_metric_copied_verbatim() {
        let sheet = Sheet {
            headers: vec!["Company name".into(), "Field".into(), "2022".into()],
            rows: vec![vec![text("  Infosys Ltd.  "), text("sales"), text("1")]],
        };
        let records = normalize_sheet(&sheet, &NormalizeOptions::default()).unwrap();

        // No trimming or case-folding on the way through.
        assert_eq!(records[0].company, "  Infosys Ltd.  ");
        assert_eq!(records[0].metric, "sales");
    }

    #[test]
    fn test_numeric_values_pass_through() {
        assert_eq!(coerce_number(&CellValue::Number(42.5)), 42.5);
        assert_eq!(coerce_number(&text(" 7 ")), 7.0);
        assert!(coerce_number(&text("abc")).is_nan());
        assert!(coerce_number(&text("information")).is_nan());
        assert!(coerce_number(&CellValue::Empty).is_nan());
        assert!(coerce_number(&CellValue::Bool(true)).is_nan());
    }

    #[test]
    fn test_numeric_prefix_parsed_from_annotated_cells() {
        assert_eq!(coerce_number(&text("100 abc")), 100.0);
        assert_eq!(coerce_number(&text("-2.5e3 USD")), -2500.0);
        assert_eq!(coerce_number(&text("3.")), 3.0);
        assert_eq!(coerce_number(&text(".5 approx")), 0.5);
        assert_eq!(coerce_number(&text("1e")), 1.0);
        assert!(coerce_number(&text("$100")).is_nan());
    }

    #[test]
    fn test_custom_reserved_headers() {
        let sheet = Sheet {
            headers: vec!["Entreprise".into(), "Mesure".into(), "2020".into()],
            rows: vec![vec![text("Wipro Ltd."), text("PAT"), text("9")]],
        };
        let options = NormalizeOptions {
            company_header: "Entreprise".into(),
            metric_header: "Mesure".into(),
        };
        let records = normalize_sheet(&sheet, &options).unwrap();
        assert_eq!(records[0].company, "Wipro Ltd.");
        assert_eq!(records[0].metric, "PAT");
    }
}
