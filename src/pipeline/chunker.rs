//! Per-model filtering and fixed-size partitioning.
//!
//! Works over already-normalized records (fields trimmed once at the ingest
//! boundary), so every comparison here is a direct string match. A single
//! pass filters and batches without materializing an intermediate filtered
//! copy.

use crate::error::AppError;
use crate::ingest::DeviceRecord;

/// A bounded-size ordered group of records for one device model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The device model every record in this chunk shares.
    pub model: String,
    /// Records in original table order.
    pub records: Vec<DeviceRecord>,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Filters `records` for `target_model` and splits the survivors into
/// consecutive chunks of at most `chunk_size` rows.
///
/// A record survives when its model equals `target_model` exactly
/// (case-sensitive), its serial number and version are non-empty, and its
/// version is in `allowed_versions`. Relative order is preserved; the last
/// chunk holds the remainder. No matching rows means no chunks, not an
/// error.
///
/// # Errors
///
/// Returns `AppError::Internal` for a zero `chunk_size`; the orchestrator
/// never passes one.
pub fn chunk_records(
    records: &[DeviceRecord],
    target_model: &str,
    allowed_versions: &[&str],
    chunk_size: usize,
) -> Result<Vec<Chunk>, AppError> {
    if chunk_size == 0 {
        return Err(AppError::Internal("chunk size must be non-zero".to_string()));
    }

    let mut chunks: Vec<Chunk> = Vec::new();
    let mut current: Vec<DeviceRecord> = Vec::new();

    let matches = records
        .iter()
        .filter(|r| record_matches(r, target_model, allowed_versions));

    for record in matches {
        current.push(record.clone());
        if current.len() == chunk_size {
            chunks.push(Chunk {
                model: target_model.to_string(),
                records: std::mem::take(&mut current),
            });
        }
    }

    if !current.is_empty() {
        chunks.push(Chunk {
            model: target_model.to_string(),
            records: current,
        });
    }

    tracing::debug!(
        model = target_model,
        chunks = chunks.len(),
        "chunking complete"
    );

    Ok(chunks)
}

/// The four filter predicates, applied to pre-trimmed fields.
fn record_matches(record: &DeviceRecord, target_model: &str, allowed_versions: &[&str]) -> bool {
    record.device_model == target_model
        && !record.serial_number.is_empty()
        && !record.version.is_empty()
        && allowed_versions.contains(&record.version.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ALLOWED_VERSIONS;

    fn record(model: &str, serial: &str, version: &str) -> DeviceRecord {
        DeviceRecord {
            device_model: model.into(),
            serial_number: serial.into(),
            version: version.into(),
        }
    }

    #[test]
    fn filters_on_all_four_predicates() {
        let records = vec![
            record("JIDU6601", "SN1", "R2.0.19"),  // kept
            record("JIDU6701", "SN2", "R2.0.19"),  // wrong model
            record("JIDU6601", "", "R2.0.19"),     // empty serial
            record("JIDU6601", "SN3", ""),         // empty version
            record("JIDU6601", "SN4", "R9.9.9"),   // disallowed version
            record("JIDU6601", "SN5", "R2.0.16"),  // kept
        ];

        let chunks = chunk_records(&records, "JIDU6601", &ALLOWED_VERSIONS, 100).unwrap();
        assert_eq!(chunks.len(), 1);
        let serials: Vec<&str> = chunks[0]
            .records
            .iter()
            .map(|r| r.serial_number.as_str())
            .collect();
        assert_eq!(serials, vec!["SN1", "SN5"]);
        assert_eq!(chunks[0].model, "JIDU6601");
    }

    #[test]
    fn model_match_is_case_sensitive() {
        let records = vec![record("jidu6601", "SN1", "R2.0.19")];
        let chunks = chunk_records(&records, "JIDU6601", &ALLOWED_VERSIONS, 100).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn no_matches_yields_no_chunks() {
        let records = vec![record("JIDU6701", "SN1", "R2.0.19")];
        let chunks = chunk_records(&records, "JIDU6601", &ALLOWED_VERSIONS, 100).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn splits_into_full_chunks_plus_remainder() {
        let records: Vec<DeviceRecord> = (0..7)
            .map(|i| record("JIDU6601", &format!("SN{}", i), "R2.0.19"))
            .collect();

        let chunks = chunk_records(&records, "JIDU6601", &ALLOWED_VERSIONS, 3).unwrap();
        let sizes: Vec<usize> = chunks.iter().map(Chunk::len).collect();
        assert_eq!(sizes, vec![3, 3, 1]);

        // Order preserved across chunk boundaries
        assert_eq!(chunks[1].records[0].serial_number, "SN3");
        assert_eq!(chunks[2].records[0].serial_number, "SN6");
    }

    #[test]
    fn exact_multiple_has_no_short_tail() {
        let records: Vec<DeviceRecord> = (0..6)
            .map(|i| record("JIDU6601", &format!("SN{}", i), "R2.0.19"))
            .collect();

        let chunks = chunk_records(&records, "JIDU6601", &ALLOWED_VERSIONS, 3).unwrap();
        let sizes: Vec<usize> = chunks.iter().map(Chunk::len).collect();
        assert_eq!(sizes, vec![3, 3]);
    }

    #[test]
    fn total_rows_match_filtered_count() {
        let records: Vec<DeviceRecord> = (0..250)
            .map(|i| record("JIDU6601", &format!("SN{}", i), "R2.0.18.2"))
            .collect();

        let chunks = chunk_records(&records, "JIDU6601", &ALLOWED_VERSIONS, 99).unwrap();
        assert_eq!(chunks.len(), 3); // ceil(250 / 99)
        let total: usize = chunks.iter().map(Chunk::len).sum();
        assert_eq!(total, 250);
    }

    #[test]
    fn zero_chunk_size_is_internal_error() {
        let records = vec![record("JIDU6601", "SN1", "R2.0.19")];
        let err = chunk_records(&records, "JIDU6601", &ALLOWED_VERSIONS, 0).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn input_is_not_consumed() {
        let records = vec![record("JIDU6601", "SN1", "R2.0.19")];
        let _ = chunk_records(&records, "JIDU6601", &ALLOWED_VERSIONS, 10).unwrap();
        // Still usable afterwards
        assert_eq!(records[0].serial_number, "SN1");
    }
}
