//! Command-line front-end for the IDU serial XML pipeline.
//!
//! Loads a CSV or Excel table, validates its schema, runs the
//! chunk-and-render pipeline, and writes either a single ZIP archive or the
//! individual XML files to the output directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use idu_serials::error::AppError;
use idu_serials::{archive, ingest, output, pipeline, validation};

#[derive(Parser, Debug)]
#[command(name = "idu-serials", version, about = "Generate per-model serial XML files from IDU device data")]
struct Cli {
    /// Input table (.csv, .xlsx, .xls, or .xlsm)
    input: PathBuf,

    /// Directory for generated output
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Write individual XML files instead of a single ZIP archive
    #[arg(long)]
    unpacked: bool,

    /// Only validate the input schema, then exit
    #[arg(long)]
    check: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    summary_json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let table = ingest::read_table(&cli.input)?;
    tracing::info!(rows = table.row_count(), "table loaded");

    if cli.check {
        let check = validation::check_schema(&table.headers);
        println!("{}", check.message());
        return check.into_result();
    }

    let result = pipeline::process_table(table).await?;
    let summary = result.summary();

    tokio::fs::create_dir_all(&cli.out_dir)
        .await
        .map_err(|e| AppError::Io(format!("failed to create output directory: {}", e)))?;

    if cli.unpacked {
        for file in result.iter_files() {
            let path = output::write_atomic(cli.out_dir.join(&file.filename), file.xml.as_bytes())?;
            tracing::info!(path = %path.display(), serials = file.serial_count, "wrote XML file");
        }
    } else {
        let bytes = archive::build_zip(&result)?;
        let path = output::write_atomic(cli.out_dir.join(archive::ARCHIVE_NAME), &bytes)?;
        tracing::info!(path = %path.display(), entries = summary.total_files, "wrote archive");
    }

    if cli.summary_json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| AppError::Internal(format!("failed to serialize summary: {}", e)))?;
        println!("{}", json);
    } else {
        for model in &summary.models {
            println!(
                "{} ({}): {} file(s), {} serial(s)",
                model.model, model.manufacturer, model.files, model.serials
            );
        }
        println!(
            "total: {} file(s), {} serial(s)",
            summary.total_files, summary.total_serials
        );
    }

    Ok(())
}
