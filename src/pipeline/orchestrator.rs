//! Run orchestration: walks the model catalog, chunks, renders, and
//! collects the generated files.
//!
//! The blocking core is pure and re-entrant; the async wrapper moves it to
//! the blocking pool so callers on a runtime thread stay responsive.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::AppError;
use crate::ingest::{DeviceRecord, RawTable};
use crate::pipeline::{chunk_records, render_chunk};

/// One generated XML document and its download filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// `{model}_Chunk{n}.xml`, 1-indexed per model.
    pub filename: String,
    /// Number of serial elements in the document.
    pub serial_count: usize,
    /// The full document, declaration line included.
    pub xml: String,
}

/// All files generated for one device model, in chunk order.
#[derive(Debug, Clone)]
pub struct ModelOutput {
    pub model: String,
    pub manufacturer: String,
    pub files: Vec<GeneratedFile>,
}

/// The complete output of one run, in model declaration order. Models with
/// zero matching rows are absent entirely.
#[derive(Debug, Clone, Default)]
pub struct OutputSet {
    pub models: Vec<ModelOutput>,
}

impl OutputSet {
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Total number of generated files across all models.
    pub fn file_count(&self) -> usize {
        self.models.iter().map(|m| m.files.len()).sum()
    }

    /// Total number of serial elements across all files.
    pub fn serial_count(&self) -> usize {
        self.iter_files().map(|f| f.serial_count).sum()
    }

    /// All generated files, model declaration order then chunk order.
    pub fn iter_files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.models.iter().flat_map(|m| m.files.iter())
    }

    /// Serializable per-run statistics.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            models: self
                .models
                .iter()
                .map(|m| ModelSummary {
                    model: m.model.clone(),
                    manufacturer: m.manufacturer.clone(),
                    files: m.files.len(),
                    serials: m.files.iter().map(|f| f.serial_count).sum(),
                })
                .collect(),
            total_files: self.file_count(),
            total_serials: self.serial_count(),
        }
    }
}

/// Per-run statistics for display or JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub models: Vec<ModelSummary>,
    pub total_files: usize,
    pub total_serials: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSummary {
    pub model: String,
    pub manufacturer: String,
    pub files: usize,
    pub serials: usize,
}

/// Runs the full chunk-and-render pipeline over normalized records.
///
/// Iterates `catalog::DEVICE_MODELS` in declaration order, chunking with
/// the global allowed-version set and `catalog::CHUNK_SIZE`. Chunk numbers
/// start at 1 per model. Any chunking or rendering failure aborts the whole
/// run.
pub fn process_records(records: &[DeviceRecord]) -> Result<OutputSet, AppError> {
    let mut models = Vec::new();

    for model in catalog::DEVICE_MODELS {
        let chunks = chunk_records(records, model, &catalog::ALLOWED_VERSIONS, catalog::CHUNK_SIZE)?;
        if chunks.is_empty() {
            continue;
        }

        let mut files = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            let xml = render_chunk(chunk)?;
            files.push(GeneratedFile {
                filename: format!("{}_Chunk{}.xml", model, i + 1),
                serial_count: chunk.len(),
                xml,
            });
        }

        tracing::debug!(model, files = files.len(), "generated XML files for model");

        models.push(ModelOutput {
            model: model.to_string(),
            manufacturer: catalog::manufacturer_for(model).to_string(),
            files,
        });
    }

    let output = OutputSet { models };
    tracing::info!(
        models = output.models.len(),
        files = output.file_count(),
        serials = output.serial_count(),
        "processing complete"
    );

    Ok(output)
}

/// Normalizes a loaded table and runs the pipeline on the blocking pool.
///
/// # Errors
///
/// Returns `AppError::Schema` for missing columns, otherwise whatever the
/// blocking pipeline reports.
pub async fn process_table(table: RawTable) -> Result<OutputSet, AppError> {
    tokio::task::spawn_blocking(move || {
        let records = table.normalize()?;
        process_records(&records)
    })
    .await
    .map_err(|e| AppError::Internal(format!("task join error: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::read_csv_str;

    fn record(model: &str, serial: &str, version: &str) -> DeviceRecord {
        DeviceRecord {
            device_model: model.into(),
            serial_number: serial.into(),
            version: version.into(),
        }
    }

    #[test]
    fn mixed_validity_scenario() {
        // One valid row, one empty serial, one disallowed version.
        let records = vec![
            record("JIDU6601", "SN1", "R2.0.19"),
            record("JIDU6601", "", "R2.0.19"),
            record("JIDU6701", "SN2", "R9.9.9"),
        ];

        let output = process_records(&records).unwrap();
        assert_eq!(output.models.len(), 1);

        let entry = &output.models[0];
        assert_eq!(entry.model, "JIDU6601");
        assert_eq!(entry.manufacturer, "Speedtech");
        assert_eq!(entry.files.len(), 1);
        assert_eq!(entry.files[0].filename, "JIDU6601_Chunk1.xml");
        assert_eq!(entry.files[0].serial_count, 1);
        assert!(entry.files[0].xml.contains(">SN1</serial>"));
    }

    #[test]
    fn chunk_boundary_scenario() {
        // 25001 valid rows -> chunks of 25000 and 1.
        let records: Vec<DeviceRecord> = (0..25_001)
            .map(|i| record("JIDU6911", &format!("SN{}", i), "R2.0.19.5"))
            .collect();

        let output = process_records(&records).unwrap();
        assert_eq!(output.models.len(), 1);

        let files = &output.models[0].files;
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].filename, "JIDU6911_Chunk1.xml");
        assert_eq!(files[1].filename, "JIDU6911_Chunk2.xml");
        assert_eq!(files[0].serial_count, 25_000);
        assert_eq!(files[1].serial_count, 1);
        assert_eq!(output.serial_count(), 25_001);
    }

    #[test]
    fn empty_input_produces_empty_output() {
        let output = process_records(&[]).unwrap();
        assert!(output.is_empty());
        assert_eq!(output.file_count(), 0);
    }

    #[test]
    fn output_follows_model_declaration_order() {
        // JIDU6101 is declared after JIDU6701 in the catalog even though it
        // sorts before it alphabetically.
        let records = vec![
            record("JIDU6101", "SN-A", "R2.0.18"),
            record("JIDU6701", "SN-B", "R2.0.18"),
        ];

        let output = process_records(&records).unwrap();
        let order: Vec<&str> = output.models.iter().map(|m| m.model.as_str()).collect();
        assert_eq!(order, vec!["JIDU6701", "JIDU6101"]);
    }

    #[test]
    fn summary_totals_add_up() {
        let records = vec![
            record("JIDU6601", "SN1", "R2.0.19"),
            record("JIDU6601", "SN2", "R2.0.19"),
            record("JIDU6311", "SN3", "R2.0.16"),
        ];

        let summary = process_records(&records).unwrap().summary();
        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.total_serials, 3);
        assert_eq!(summary.models.len(), 2);
        assert_eq!(summary.models[0].model, "JIDU6601");
        assert_eq!(summary.models[0].serials, 2);
        assert_eq!(summary.models[1].manufacturer, "Bluebank");
    }

    #[test]
    fn reprocessing_is_deterministic() {
        let records = vec![
            record("JIDU6601", "SN1", "R2.0.19"),
            record("JIDU6811", "SN2", "R2.0.18"),
        ];

        let a = process_records(&records).unwrap();
        let b = process_records(&records).unwrap();
        let files_a: Vec<_> = a.iter_files().collect();
        let files_b: Vec<_> = b.iter_files().collect();
        assert_eq!(files_a, files_b);
    }

    #[tokio::test]
    async fn process_table_normalizes_then_runs() {
        let table = read_csv_str(
            "Device Model,Serial Number,Version\n JIDU6601 , SN1 , R2.0.19 \nJIDU6601,SN2,R9.9.9\n",
        )
        .unwrap();

        let output = process_table(table).await.unwrap();
        assert_eq!(output.file_count(), 1);
        assert_eq!(output.models[0].files[0].serial_count, 1);
        assert!(output.models[0].files[0].xml.contains(">SN1</serial>"));
    }

    #[tokio::test]
    async fn process_table_surfaces_schema_errors() {
        let table = read_csv_str("Model,Serial\nJIDU6601,SN1\n").unwrap();
        let err = process_table(table).await.unwrap_err();
        assert!(matches!(err, AppError::Schema { .. }));
    }
}
