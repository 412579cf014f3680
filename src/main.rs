//! CLI entry point for the penguin statistics report.
//!
//! Loads the specimen CSV, runs every grouped aggregation and writes the
//! text report (and optionally a JSON copy).

use anyhow::{Context, Result};
use clap::Parser;
use penguin_stats::{
    analyzers::penguins::run_all,
    loader::load_records,
    output::{write_json, write_report},
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "penguin_stats")]
#[command(about = "Grouped summary statistics for the penguins dataset", long_about = None)]
struct Cli {
    /// CSV file to read specimens from
    #[arg(short, long, default_value = "penguins.csv")]
    input: PathBuf,

    /// Text report to write (overwritten on each run)
    #[arg(short, long, default_value = "penguins_report.txt")]
    output: PathBuf,

    /// Optional: also write the results as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/penguin_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("penguin_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let record_count = run(&cli)?;

    println!(
        "Analysis complete: {} records analyzed, report written to {}",
        record_count,
        cli.output.display()
    );

    Ok(())
}

/// Load -> aggregate -> write. Returns the number of records analyzed.
#[tracing::instrument(skip_all, fields(input = %cli.input.display(), output = %cli.output.display()))]
fn run(cli: &Cli) -> Result<usize> {
    let records = load_records(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    if records.is_empty() {
        warn!("Input contains a header but no records");
    }

    let report = run_all(&records);

    write_report(&cli.output, &report)?;
    info!(sections = report.len(), "Text report written");

    if let Some(json_path) = &cli.json {
        write_json(json_path, &report)?;
        info!(path = %json_path.display(), "JSON report written");
    }

    Ok(records.len())
}
