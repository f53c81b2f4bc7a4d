//! Spreadsheet loader built on calamine.
//!
//! Opens a workbook file (`.xls`, `.xlsx`, `.ods` - whatever
//! `open_workbook_auto` recognizes) and exposes its first sheet as a
//! [`Sheet`]: a header row plus positional rows of [`CellValue`]s.
//! The loader re-reads the file on every call; there is no cache.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::{WorkbookError, WorkbookResult};
use crate::models::{CellValue, Sheet};

/// Load the first sheet of a workbook as rows.
///
/// Fails with [`WorkbookError`] when the file is missing, unreadable, not
/// a valid workbook, has no sheets, or its first sheet has no header row.
pub fn load_first_sheet<P: AsRef<Path>>(path: P) -> WorkbookResult<Sheet> {
    let mut workbook = open_workbook_auto(path.as_ref())?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(WorkbookError::NoSheets)?;

    let range = workbook.worksheet_range(&sheet_name)?;
    sheet_from_range(&range)
}

/// Convert a cell range into a [`Sheet`].
///
/// The first row of the range is the header row; every following row
/// becomes a row of cells aligned with those headers.
pub fn sheet_from_range(range: &Range<Data>) -> WorkbookResult<Sheet> {
    let mut rows_iter = range.rows();

    let header_row = rows_iter.next().ok_or(WorkbookError::NoHeaders)?;
    let headers: Vec<String> = header_row.iter().map(header_label).collect();

    let rows: Vec<Vec<CellValue>> = rows_iter
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect();

    Ok(Sheet { headers, rows })
}

/// Render a header cell as a column label.
///
/// Numeric headers lose a trailing `.0` so a year column stored as the
/// number 2022 classifies the same as the text "2022".
fn header_label(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", *f as i64),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}
