//! Input table loading and normalization.
//!
//! Tables arrive as CSV files, pasted CSV text, or Excel workbooks. Loading
//! produces a [`RawTable`] that keeps every column; [`RawTable::normalize`]
//! then validates the schema and projects each row into a typed
//! [`DeviceRecord`], trimming whitespace exactly once at that boundary so the
//! chunker and renderer can compare fields directly.

mod csv_reader;
mod spreadsheet_reader;

pub use csv_reader::{read_csv_file, read_csv_str};
pub use spreadsheet_reader::read_spreadsheet;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::validation::{check_schema, REQUIRED_COLUMNS};

/// One typed input row with trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub device_model: String,
    pub serial_number: String,
    pub version: String,
}

/// A loaded table before schema validation: header names plus ordered rows
/// of string cells. Extra columns are kept here and ignored during
/// normalization, not dropped.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Validates the schema and projects rows into typed records.
    ///
    /// Whitespace trimming happens here, once, for all three fields. Rows
    /// shorter than the header produce empty strings for the absent cells;
    /// the chunker's non-empty filters discard them later.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Schema` listing the missing column names if any
    /// required column is absent.
    pub fn normalize(&self) -> Result<Vec<DeviceRecord>, AppError> {
        check_schema(&self.headers).into_result()?;

        let model_idx = self.column_index(REQUIRED_COLUMNS[0]);
        let serial_idx = self.column_index(REQUIRED_COLUMNS[1]);
        let version_idx = self.column_index(REQUIRED_COLUMNS[2]);

        let records = self
            .rows
            .iter()
            .map(|row| DeviceRecord {
                device_model: trimmed_cell(row, model_idx),
                serial_number: trimmed_cell(row, serial_idx),
                version: trimmed_cell(row, version_idx),
            })
            .collect();

        Ok(records)
    }

    /// Index of the first column named `name`. Only called after the schema
    /// check guaranteed presence.
    fn column_index(&self, name: &str) -> usize {
        self.headers
            .iter()
            .position(|h| h == name)
            .unwrap_or(usize::MAX)
    }
}

fn trimmed_cell(row: &[String], idx: usize) -> String {
    row.get(idx).map(|cell| cell.trim()).unwrap_or("").to_string()
}

/// Loads a table from `path`, dispatching on the file extension.
///
/// `.csv` goes through the CSV reader; `.xlsx`, `.xls`, and `.xlsm` go
/// through the spreadsheet reader.
///
/// # Errors
///
/// Returns `AppError::UnsupportedFormat` for any other extension.
pub fn read_table(path: &Path) -> Result<RawTable, AppError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("csv") => read_csv_file(path),
        Some("xlsx") | Some("xls") | Some("xlsm") => read_spreadsheet(path),
        _ => Err(AppError::UnsupportedFormat(format!(
            "{} (expected csv, xlsx, xls, or xlsm)",
            path.display()
        ))),
    }
}
