//! CLI argument parsing module for chartup

use crate::events::Verbosity;
use crate::orchestrator::UpdateConfig;
use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Parse the dependency registry argument: a JSON object mapping each
/// dependency name to the URL its latest version is published at.
fn parse_registry(s: &str) -> Result<BTreeMap<String, String>, String> {
    serde_json::from_str(s).map_err(|e| format!("invalid dependencies JSON: {}", e))
}

/// Helm chart dependency updater
#[derive(Parser, Debug, Clone)]
#[command(
    name = "chartup",
    version,
    about = "Update the dependencies of a local Helm chart"
)]
pub struct CliArgs {
    /// Chart directory containing requirements.yaml, or a direct path to the file
    pub chart: PathBuf,

    /// JSON object of dependency names and their upstream source URLs,
    /// e.g. '{"nginx-ingress": "https://raw.githubusercontent.com/helm/charts/master/stable/nginx-ingress/Chart.yaml"}'
    #[arg(value_parser = parse_registry)]
    pub dependencies: BTreeMap<String, String>,

    /// Dry run mode - detect and report changes without writing the file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// The effective output verbosity; quiet beats verbose
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }

    /// Build the run configuration
    pub fn to_config(&self) -> UpdateConfig {
        UpdateConfig {
            chart_path: self.chart.clone(),
            registry: self.dependencies.clone(),
            dry_run: self.dry_run,
        }
    }
}
