//! Upstream source classification
//!
//! Each dependency's source URL is classified exactly once, when the registry
//! is loaded, into one of three shapes. The checks are ordered and the first
//! match wins, since nothing stops a URL from satisfying two patterns at once.

use crate::error::SourceError;
use std::collections::BTreeMap;

/// A classified upstream source for one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A remotely hosted `Chart.yaml` with a root-level `version` field
    ChartFile { url: String },
    /// A chart repository index served from a `gh-pages` branch, with an
    /// `entries` map of release records
    FeedIndex { url: String },
    /// A `/releases/latest` HTML page whose anchors carry version tags
    ReleasesPage { url: String },
}

impl Source {
    /// Classify a source URL, checking the chart-file suffix first, then the
    /// feed-index path segment, then the releases-page suffix.
    pub fn classify(dependency: &str, url: &str) -> Result<Self, SourceError> {
        if url.ends_with("Chart.yaml") {
            Ok(Source::ChartFile {
                url: url.to_string(),
            })
        } else if url.contains("/gh-pages/") {
            Ok(Source::FeedIndex {
                url: url.to_string(),
            })
        } else if url.ends_with("/releases/latest") {
            Ok(Source::ReleasesPage {
                url: url.to_string(),
            })
        } else {
            Err(SourceError::unrecognized(dependency, url))
        }
    }

    /// The URL this source is fetched from
    pub fn url(&self) -> &str {
        match self {
            Source::ChartFile { url } => url,
            Source::FeedIndex { url } => url,
            Source::ReleasesPage { url } => url,
        }
    }

    /// Short human-readable label for the source shape
    pub fn kind(&self) -> &'static str {
        match self {
            Source::ChartFile { .. } => "chart file",
            Source::FeedIndex { .. } => "feed index",
            Source::ReleasesPage { .. } => "releases page",
        }
    }
}

/// The caller-supplied registry of dependency name to classified source.
///
/// Built once from the raw `name -> url` mapping; read-only afterwards.
/// Iteration order is by name, which need not match the requirements file.
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    sources: BTreeMap<String, Source>,
}

impl SourceRegistry {
    /// Classify every URL in the raw registry. Any unrecognized URL fails the
    /// whole load, before a single network call is made.
    pub fn from_urls(urls: &BTreeMap<String, String>) -> Result<Self, SourceError> {
        let mut sources = BTreeMap::new();
        for (name, url) in urls {
            let source = Source::classify(name, url)?;
            sources.insert(name.clone(), source);
        }
        Ok(Self { sources })
    }

    /// Iterate dependencies and their classified sources in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Source)> {
        self.sources.iter()
    }

    /// Number of registered dependencies
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if the registry holds no dependencies
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
