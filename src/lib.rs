//! IDU device data processor and XML generator.
//!
//! Ingests a tabular dataset of device records (`Device Model`,
//! `Serial Number`, `Version`), filters rows per device model against an
//! allow-list of firmware versions, partitions the survivors into
//! fixed-size chunks, and renders each chunk as an XML serial list. The
//! full output can be bundled into a single ZIP archive.
//!
//! ```no_run
//! use idu_serials::{archive, ingest, pipeline};
//!
//! # async fn run() -> Result<(), idu_serials::AppError> {
//! let table = ingest::read_csv_str(
//!     "Device Model,Serial Number,Version\nJIDU6601,SN1,R2.0.19\n",
//! )?;
//! let output = pipeline::process_table(table).await?;
//! let zip_bytes = archive::build_zip(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod catalog;
pub mod error;
pub mod ingest;
pub mod output;
pub mod pipeline;
pub mod validation;

pub use archive::{build_zip, ARCHIVE_NAME};
pub use error::AppError;
pub use ingest::{read_table, DeviceRecord, RawTable};
pub use pipeline::{process_records, process_table, OutputSet, RunSummary};
pub use validation::{check_schema, SchemaCheck, REQUIRED_COLUMNS};
