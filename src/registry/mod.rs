//! Remote version resolution
//!
//! This module provides:
//! - HTTP client shared foundation
//! - Chart-file extractor (remote Chart.yaml)
//! - Feed-index extractor (gh-pages repository index)
//! - Releases-page extractor (latest-release HTML)
//! - `resolve_all`, the dispatch loop over a classified source registry

mod chart_file;
mod client;
mod feed_index;
mod releases_page;

pub use client::HttpClient;

use crate::domain::{Source, SourceRegistry};
use crate::error::AppError;
use crate::events::{Event, EventSink};
use std::collections::BTreeMap;

/// Resolve the latest upstream version of every dependency in the registry.
///
/// Fetches run one at a time in registry order. Any fetch or extraction
/// failure aborts the whole resolution; the caller never sees a partial
/// mapping. A releases page with no qualifying tag contributes no entry
/// rather than failing here; the comparison stage reports the gap.
pub async fn resolve_all(
    client: &HttpClient,
    registry: &SourceRegistry,
    sink: &dyn EventSink,
) -> Result<BTreeMap<String, String>, AppError> {
    let mut versions = BTreeMap::new();

    for (name, source) in registry.iter() {
        sink.emit(&Event::Resolving {
            dependency: name.clone(),
            url: source.url().to_string(),
        });

        let body = client.get_text(source.url()).await?;

        let version = match source {
            Source::ChartFile { url } => Some(chart_file::extract_version(&body, name, url)?),
            Source::FeedIndex { url } => Some(feed_index::extract_version(&body, name, url)?),
            Source::ReleasesPage { url } => {
                let found = releases_page::extract_version(&body);
                if found.is_none() {
                    sink.emit(&Event::NoReleaseTag {
                        dependency: name.clone(),
                        url: url.clone(),
                    });
                }
                found
            }
        };

        if let Some(version) = version {
            sink.emit(&Event::Resolved {
                dependency: name.clone(),
                version: version.clone(),
            });
            versions.insert(name.clone(), version);
        }
    }

    Ok(versions)
}
