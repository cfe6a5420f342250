//! Filter, chunk, and render pipeline.
//!
//! The orchestrator walks the model catalog, the chunker filters and
//! partitions normalized records for one model, and the renderer turns each
//! chunk into a pretty-printed XML document. Every stage is a pure
//! transformation over in-memory data; re-running the pipeline on the same
//! table yields identical output.

mod chunker;
mod orchestrator;
mod xml_renderer;

pub use chunker::{chunk_records, Chunk};
pub use orchestrator::{
    process_records, process_table, GeneratedFile, ModelOutput, ModelSummary, OutputSet,
    RunSummary,
};
pub use xml_renderer::render_chunk;
