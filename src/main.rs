use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use citemap::{
    ApiClientBuilder, CitemapError, DEFAULT_OUTPUT_PATH, ProcessedItem, process_api_data,
    process_mock_data, process_records, read_records, sample_dataset, write_output,
};
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// citemap - find which sources an answer cites
#[derive(Parser)]
#[command(name = "citemap")]
#[command(about = "Match responses against candidate sources and save the citations")]
#[command(version)]
struct Cli {
    /// File the citations are written to (overwritten on every run)
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH, global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Process the built-in sample dataset (default)
    Sample,
    /// Fetch records from the messages API and process them
    Fetch(FetchCommand),
    /// Process records from a JSON file
    Process(ProcessCommand),
}

/// Fetch records over HTTP
#[derive(Parser)]
struct FetchCommand {
    /// API endpoint; falls back to CITEMAP_API_URL, then the built-in URL
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,
}

/// Process a local records file
#[derive(Parser)]
struct ProcessCommand {
    /// JSON file holding an array of response records
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

fn main() {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    let result = match &cli.command {
        None | Some(Commands::Sample) => Ok(process_mock_data(&sample_dataset())),
        Some(Commands::Fetch(cmd)) => handle_fetch(cmd),
        Some(Commands::Process(cmd)) => handle_process(cmd),
    }
    .and_then(|items| save_and_report(&items, &cli.output));

    if let Err(e) = result {
        let exit_code = if is_user_error(&e) { 1 } else { 2 };
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code);
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines if an error is a user error (vs internal error).
///
/// Malformed input records are user errors; I/O and serialization failures
/// are internal.
fn is_user_error(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<CitemapError>(),
            Some(CitemapError::MalformedRecord { .. })
        )
    })
}

/// Fetches and processes live records.
///
/// A failed fetch is logged and produces an empty result rather than an error.
/// A body of the wrong shape is still an error.
fn handle_fetch(cmd: &FetchCommand) -> Result<Vec<ProcessedItem>> {
    let mut builder = ApiClientBuilder::new();
    if let Some(url) = &cmd.url {
        builder = builder.url(url);
    }
    let client = builder.build().context("Failed to create API client")?;

    match process_api_data(&client) {
        Ok(items) => Ok(items),
        Err(CitemapError::Fetch(e)) => {
            error!("Error fetching data from API: {e}");
            Ok(Vec::new())
        }
        Err(e) => Err(e).context("Failed to process API records"),
    }
}

/// Reads and processes records from a local file.
fn handle_process(cmd: &ProcessCommand) -> Result<Vec<ProcessedItem>> {
    let records = read_records(&cmd.input)
        .with_context(|| format!("Failed to read records from {}", cmd.input.display()))?;

    process_records(&records)
        .with_context(|| format!("Failed to process records from {}", cmd.input.display()))
}

/// Writes the result, echoes non-empty output, and prints the confirmation.
fn save_and_report(items: &[ProcessedItem], output: &Path) -> Result<()> {
    let json = write_output(output, items)
        .with_context(|| format!("Failed to write citations to {}", output.display()))?;

    if !items.is_empty() {
        println!("{json}");
    }
    println!("Citations have been saved to {}", output.display());

    Ok(())
}
