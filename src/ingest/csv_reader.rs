//! CSV table loading.
//!
//! Accepts CSV files and pasted CSV text. Strips a UTF-8 BOM if present,
//! rejects non-UTF-8 input, and is flexible about per-row column counts
//! (ragged rows are padded with empty strings during normalization).

use std::io::Cursor;
use std::path::Path;

use crate::error::AppError;
use crate::ingest::RawTable;

/// UTF-8 BOM bytes.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Reads a CSV file from disk into a `RawTable`.
///
/// # Errors
///
/// Returns `AppError::CsvInvalid` if the file cannot be read or parsed, and
/// `AppError::NotUtf8` if the contents are not valid UTF-8.
pub fn read_csv_file(path: &Path) -> Result<RawTable, AppError> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::CsvInvalid(format!("failed to read {}: {}", path.display(), e)))?;
    read_csv_bytes(&bytes)
}

/// Parses pasted CSV text (header row included) into a `RawTable`.
pub fn read_csv_str(text: &str) -> Result<RawTable, AppError> {
    read_csv_bytes(text.as_bytes())
}

fn read_csv_bytes(bytes: &[u8]) -> Result<RawTable, AppError> {
    let data = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if std::str::from_utf8(data).is_err() {
        return Err(AppError::NotUtf8);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(data));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::CsvInvalid(format!("failed to read headers: {}", e)))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record =
            result.map_err(|e| AppError::CsvInvalid(format!("failed to read record: {}", e)))?;
        rows.push(record.iter().map(String::from).collect());
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "loaded CSV table");

    Ok(RawTable { headers, rows })
}
