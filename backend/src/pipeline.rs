//! One-shot Loader -> Normalizer composition.
//!
//! The whole read path is a pure function of the file path: every call
//! re-reads the workbook from disk and re-runs the transform. The absence
//! of caching is deliberate - the served data always reflects the file on
//! disk, and no state is shared between requests.

use std::path::Path;

use crate::error::PipelineResult;
use crate::loader::load_first_sheet;
use crate::models::FinancialRecord;
use crate::normalize::{normalize_sheet, NormalizeOptions};

/// Load a workbook and normalize its first sheet into flat records.
///
/// All-or-nothing per request: either the whole record set is returned,
/// or the error that stopped it.
pub fn load_records<P: AsRef<Path>>(
    path: P,
    options: &NormalizeOptions,
) -> PipelineResult<Vec<FinancialRecord>> {
    let sheet = load_first_sheet(path)?;
    let records = normalize_sheet(&sheet, options)?;
    Ok(records)
}
