use thiserror::Error;

/// Application-wide error type.
///
/// Every failure surfaced to callers carries a human-readable message; there
/// are no structured error codes and no retry semantics. A model with zero
/// matching rows is not an error and never produces a variant here.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Schema ────────────────────────────────────────────────────────────────
    #[error("missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    // ── Input parsing ─────────────────────────────────────────────────────────
    #[error("file is not valid UTF-8")]
    NotUtf8,

    #[error("invalid CSV: {0}")]
    CsvInvalid(String),

    #[error("invalid spreadsheet: {0}")]
    SpreadsheetInvalid(String),

    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    // ── Generation ────────────────────────────────────────────────────────────
    #[error("XML generation failed: {0}")]
    Xml(String),

    #[error("archive error: {0}")]
    Archive(String),

    // ── Output ────────────────────────────────────────────────────────────────
    #[error("I/O error: {0}")]
    Io(String),

    // ── Generic fallback ──────────────────────────────────────────────────────
    #[error("internal error: {0}")]
    Internal(String),
}
