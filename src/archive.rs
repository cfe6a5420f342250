//! ZIP packaging of generated XML files.
//!
//! The archive is built directly in memory: one deflate-compressed entry
//! per generated file, named exactly by its filename, no directory nesting.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::AppError;
use crate::pipeline::OutputSet;

/// Default filename for the bulk archive.
pub const ARCHIVE_NAME: &str = "xml_files.zip";

/// Bundles every generated file into a single ZIP, returned as bytes.
///
/// An empty output set produces a valid zero-entry archive.
///
/// # Errors
///
/// Returns `AppError::Archive` if any entry cannot be written.
pub fn build_zip(output: &OutputSet) -> Result<Vec<u8>, AppError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in output.iter_files() {
        writer
            .start_file(file.filename.as_str(), options)
            .map_err(|e| {
                AppError::Archive(format!("failed to start entry {}: {}", file.filename, e))
            })?;
        writer.write_all(file.xml.as_bytes()).map_err(|e| {
            AppError::Archive(format!("failed to write entry {}: {}", file.filename, e))
        })?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| AppError::Archive(format!("failed to finalize archive: {}", e)))?;

    let bytes = cursor.into_inner();
    tracing::debug!(
        entries = output.file_count(),
        bytes = bytes.len(),
        "archive built"
    );

    Ok(bytes)
}
