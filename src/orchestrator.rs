//! Update orchestrator for coordinating the whole run
//!
//! This module provides:
//! - The explicit run configuration record
//! - Workflow coordination: read local → resolve remote → compare → write
//! - Dry-run mode support
//!
//! The local read and the remote resolution are independent of each other;
//! both must succeed before the comparison, and nothing is written unless
//! they do. There are no retries and no rollback.

use crate::domain::{SourceRegistry, UpdateSummary, VersionChange};
use crate::error::AppError;
use crate::events::{Event, EventSink};
use crate::manifest::{self, ManifestWriter};
use crate::progress::Progress;
use crate::registry::{self, HttpClient};
use crate::update;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Statically-shaped run configuration. Exactly these three inputs drive a
/// run; nothing else is copied in from the argument parser.
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    /// Chart directory or direct path to the requirements file
    pub chart_path: PathBuf,
    /// Dependency name to upstream source URL
    pub registry: BTreeMap<String, String>,
    /// Detect and report changes without writing the file
    pub dry_run: bool,
}

/// Orchestrator for one update run
#[derive(Debug)]
pub struct Orchestrator {
    config: UpdateConfig,
    sources: SourceRegistry,
    client: HttpClient,
}

impl Orchestrator {
    /// Create an orchestrator, classifying every registry URL up front.
    ///
    /// An unrecognized source URL fails here, before any file or network
    /// access.
    pub fn new(config: UpdateConfig) -> Result<Self, AppError> {
        let sources = SourceRegistry::from_urls(&config.registry)?;
        let client = HttpClient::new()?;

        Ok(Self {
            config,
            sources,
            client,
        })
    }

    /// Run the update workflow end to end.
    ///
    /// Reads the local versions, resolves the remote ones, diffs, and, when
    /// changes exist and this is not a dry run, rewrites the requirements
    /// file. Any failure before the write leaves the file untouched.
    pub async fn run(
        &self,
        sink: &dyn EventSink,
        show_progress: bool,
    ) -> Result<UpdateSummary, AppError> {
        if self.config.dry_run {
            sink.emit(&Event::DryRun);
        }

        let path = manifest::requirements_path(&self.config.chart_path);

        sink.emit(&Event::ReadingManifest { path: path.clone() });
        let local = manifest::read_local(&path)?;

        let mut progress = Progress::new(show_progress);
        progress.spinner(&format!(
            "Resolving {} remote version(s)...",
            self.sources.len()
        ));
        let remote = registry::resolve_all(&self.client, &self.sources, sink).await;
        progress.finish_and_clear();
        let remote = remote?;

        let behind = update::diff(&local, &remote)?;

        if behind.is_empty() {
            sink.emit(&Event::UpToDate);
            return Ok(UpdateSummary::up_to_date(self.config.dry_run));
        }

        let changes: Vec<VersionChange> = behind
            .iter()
            .map(|name| {
                VersionChange::new(name.as_str(), local[name].as_str(), remote[name].as_str())
            })
            .collect();

        sink.emit(&Event::UpdatesAvailable {
            changes: changes.clone(),
        });

        let writer = ManifestWriter::new(self.config.dry_run);
        let write = writer.apply_changes(&path, &changes)?;

        if write.file_modified {
            sink.emit(&Event::Written {
                path: path.clone(),
                updated: write.updates_applied,
            });
        }

        Ok(UpdateSummary {
            changes,
            dry_run: self.config.dry_run,
            file_modified: write.file_modified,
        })
    }
}
