//! Atomic output file writing.
//!
//! Writes to a temporary file in the destination directory, then atomically
//! replaces the destination on `finish()`. If dropped before finishing, the
//! temporary file is automatically cleaned up.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::AppError;

/// An atomic file writer for generated artifacts (XML documents, archives).
///
/// The temporary file lives in the same directory as `final_path` so the
/// final rename stays on one filesystem.
pub struct AtomicFileWriter {
    writer: BufWriter<NamedTempFile>,
    final_path: PathBuf,
}

impl AtomicFileWriter {
    /// Creates a writer targeting `final_path`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the parent directory cannot be determined
    /// or the temporary file cannot be created.
    pub fn new(final_path: impl AsRef<Path>) -> Result<Self, AppError> {
        let final_path = final_path.as_ref().to_path_buf();

        let parent_dir = final_path.parent().ok_or_else(|| {
            AppError::Io(format!(
                "cannot determine parent directory for {}",
                final_path.display()
            ))
        })?;

        let temp_file = NamedTempFile::new_in(parent_dir)
            .map_err(|e| AppError::Io(format!("failed to create temporary file: {}", e)))?;

        Ok(Self {
            writer: BufWriter::new(temp_file),
            final_path,
        })
    }

    /// Appends bytes to the pending file.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<(), AppError> {
        self.writer
            .write_all(bytes)
            .map_err(|e| AppError::Io(format!("failed to write output: {}", e)))
    }

    /// Flushes and atomically persists the file to the final path, returning
    /// that path.
    pub fn finish(self) -> Result<PathBuf, AppError> {
        let temp_file = self
            .writer
            .into_inner()
            .map_err(|e| AppError::Io(format!("failed to flush output buffer: {}", e.error())))?;

        temp_file.persist(&self.final_path).map_err(|e| {
            AppError::Io(format!(
                "failed to persist {}: {}",
                self.final_path.display(),
                e.error
            ))
        })?;

        Ok(self.final_path)
    }
}

/// Writes `bytes` to `path` atomically.
pub fn write_atomic(path: impl AsRef<Path>, bytes: &[u8]) -> Result<PathBuf, AppError> {
    let mut writer = AtomicFileWriter::new(path)?;
    writer.write_all(bytes)?;
    writer.finish()
}
