//! Target Finder
//!
//! Command-line front end for TargetSeek: load a CSV file, pick columns,
//! and search for subsets matching one or more target values.
//!
//! ```text
//! target-finder data.csv --targets 25,50,100 --mode sum --tolerance 0.5
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use targetseek::prelude::*;
use targetseek::{CsvSource, ReportRenderer, Tolerance};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "target-finder", about = "Find subsets matching target values")]
struct Args {
    /// CSV file to search.
    file: PathBuf,

    /// Comma-separated target values.
    #[arg(short, long, value_delimiter = ',', required = true)]
    targets: Vec<f64>,

    /// Aggregation mode: sum, product, difference or quotient.
    #[arg(short, long, default_value = "sum")]
    mode: Mode,

    /// Absolute tolerance around each target (exact match by default).
    #[arg(long)]
    tolerance: Option<f64>,

    /// Relative tolerance as a fraction, e.g. 0.05 for 5%.
    #[arg(long, conflicts_with = "tolerance")]
    relative_tolerance: Option<f64>,

    /// Columns to search; defaults to every numeric column.
    #[arg(short, long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Configuration file (TOML).
    #[arg(long, default_value = "targetseek.toml")]
    config: PathBuf,

    /// Disable colored output.
    #[arg(long)]
    plain: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(found) => {
            if found {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> targetseek::Result<bool> {
    let config = SearchConfig::load(&args.config).unwrap_or_default();

    let source = CsvSource::from_path(&args.file)?;
    let set = if args.columns.is_empty() {
        source.full_value_set()?
    } else {
        source.value_set(&args.columns)?
    };

    let tolerance = match (args.tolerance, args.relative_tolerance) {
        (Some(t), _) => Tolerance::Absolute(t),
        (None, Some(r)) => Tolerance::Relative(r),
        (None, None) => Tolerance::Exact,
    };
    let request = SearchRequest::with_targets(args.mode, args.targets.clone())
        .with_tolerance(tolerance);

    let report = SearchEngine::new(config).search(&set, &request)?;

    let renderer = if args.plain {
        ReportRenderer::new()
    } else {
        ReportRenderer::colored()
    };
    renderer.print(&report);

    Ok(!report.is_empty())
}
