//! Structured run events and sinks
//!
//! Components never touch a global logger. Each stage emits an [`Event`] into
//! an injected [`EventSink`]; the sink decides what to render. The default
//! [`ConsoleSink`] writes human-readable lines, progress-style detail only at
//! verbose level. [`NullSink`] swallows everything and is used in tests.

use crate::domain::VersionChange;
use colored::Colorize;
use std::path::PathBuf;

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Minimal output
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Detailed output with additional information
    Verbose,
}

impl Verbosity {
    /// Derive the verbosity from CLI flags; quiet beats verbose
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// One structured event emitted during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The run will not write any file
    DryRun,
    /// The requirements file is being read
    ReadingManifest { path: PathBuf },
    /// A dependency's upstream source is being queried
    Resolving { dependency: String, url: String },
    /// A dependency's latest upstream version was found
    Resolved { dependency: String, version: String },
    /// A releases page contained no qualifying version tag
    NoReleaseTag { dependency: String, url: String },
    /// Every tracked dependency matches its upstream version
    UpToDate,
    /// At least one dependency is behind upstream
    UpdatesAvailable { changes: Vec<VersionChange> },
    /// The requirements file was rewritten
    Written { path: PathBuf, updated: usize },
}

/// Receiver for run events
pub trait EventSink {
    /// Handle one event
    fn emit(&self, event: &Event);
}

/// Sink that renders events to the terminal
pub struct ConsoleSink {
    verbosity: Verbosity,
}

impl ConsoleSink {
    /// Creates a console sink at the given verbosity
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    fn verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    fn normal(&self) -> bool {
        self.verbosity != Verbosity::Quiet
    }
}

impl EventSink for ConsoleSink {
    fn emit(&self, event: &Event) {
        match event {
            Event::DryRun => {
                if self.normal() {
                    eprintln!("{} no files will be changed", "dry-run:".cyan());
                }
            }
            Event::ReadingManifest { path } => {
                if self.verbose() {
                    eprintln!("Reading local chart dependencies from {}", path.display());
                }
            }
            Event::Resolving { dependency, url } => {
                if self.verbose() {
                    eprintln!("Retrieving the latest version of {} from {}", dependency, url);
                }
            }
            Event::Resolved {
                dependency,
                version,
            } => {
                if self.verbose() {
                    eprintln!("  {} -> {}", dependency, version);
                }
            }
            Event::NoReleaseTag { dependency, url } => {
                if self.verbose() {
                    eprintln!(
                        "  {} no version tag found for {} at {}",
                        "warning:".yellow(),
                        dependency,
                        url
                    );
                }
            }
            Event::UpToDate => {
                if self.normal() {
                    println!("{}", "All chart dependencies are up-to-date".green());
                }
            }
            Event::UpdatesAvailable { changes } => {
                if self.normal() {
                    println!("New versions are available:");
                    for change in changes {
                        println!(
                            "  {}: {} {} {}",
                            change.name.bold(),
                            change.local,
                            "-->".dimmed(),
                            change.remote.green()
                        );
                    }
                }
            }
            Event::Written { path, updated } => {
                if self.normal() {
                    println!(
                        "Updated {} {} in {}",
                        updated,
                        if *updated == 1 {
                            "dependency"
                        } else {
                            "dependencies"
                        },
                        path.display()
                    );
                }
            }
        }
    }
}

/// Sink that ignores every event
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &Event) {}
}
