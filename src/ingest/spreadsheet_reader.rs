//! Excel workbook loading via calamine.
//!
//! Reads the first worksheet, treating the first row as the header row.
//! Cells are coerced to strings: empty cells become empty strings, numeric
//! cells their display form. No type checking happens here.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::AppError;
use crate::ingest::RawTable;

/// Reads the first worksheet of an Excel workbook (xlsx/xls/xlsm) into a
/// `RawTable`.
///
/// # Errors
///
/// Returns `AppError::SpreadsheetInvalid` if the workbook cannot be opened,
/// has no worksheets, or its first sheet cannot be read.
pub fn read_spreadsheet(path: &Path) -> Result<RawTable, AppError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        AppError::SpreadsheetInvalid(format!("failed to open {}: {}", path.display(), e))
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::SpreadsheetInvalid("workbook has no worksheets".to_string()))?
        .map_err(|e| AppError::SpreadsheetInvalid(format!("failed to read worksheet: {}", e)))?;

    let mut rows_iter = range.rows();

    let headers: Vec<String> = match rows_iter.next() {
        Some(row) => row.iter().map(cell_to_string).collect(),
        None => Vec::new(),
    };

    let rows: Vec<Vec<String>> = rows_iter
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    tracing::debug!(
        rows = rows.len(),
        columns = headers.len(),
        "loaded spreadsheet table"
    );

    Ok(RawTable { headers, rows })
}

/// Coerces a worksheet cell to a string. Empty cells map to the empty
/// string so the downstream non-empty filters treat them like blank CSV
/// fields.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
