//! chartup - Helm chart dependency updater CLI tool
//!
//! Checks the dependency versions declared in a local chart's
//! requirements.yaml against the latest versions published by their upstream
//! sources, and rewrites the file to match unless --dry-run is given.

use chartup::cli::CliArgs;
use chartup::events::{ConsoleSink, Verbosity};
use chartup::orchestrator::Orchestrator;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let verbosity = args.verbosity();

    if verbosity == Verbosity::Verbose {
        eprintln!("chartup v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Chart: {}", args.chart.display());
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let sink = ConsoleSink::new(verbosity);
    let show_progress = verbosity != Verbosity::Quiet;

    let orchestrator = Orchestrator::new(args.to_config())?;
    orchestrator.run(&sink, show_progress).await?;

    Ok(ExitCode::SUCCESS)
}
