//! Required-column check for loaded tables.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Column names the pipeline requires, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Device Model", "Serial Number", "Version"];

/// Result of the schema check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaCheck {
    /// Whether all required columns are present.
    pub ok: bool,
    /// Required columns absent from the table, in `REQUIRED_COLUMNS` order.
    pub missing: Vec<String>,
}

impl SchemaCheck {
    /// Human-readable outcome message.
    pub fn message(&self) -> String {
        if self.ok {
            "Data validated successfully".to_string()
        } else {
            format!("Missing required columns: {}", self.missing.join(", "))
        }
    }

    /// Converts a failed check into an `AppError::Schema`.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.ok {
            Ok(())
        } else {
            Err(AppError::Schema { missing: self.missing })
        }
    }
}

/// Checks that every required column name appears in `headers`.
///
/// Matching is exact (case-sensitive, no trimming). Extra columns never
/// fail the check, and an empty table with the right headers passes.
pub fn check_schema(headers: &[String]) -> SchemaCheck {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .map(|required| required.to_string())
        .collect();

    SchemaCheck {
        ok: missing.is_empty(),
        missing,
    }
}
