//! Feed-index version extraction
//!
//! The remote body is a chart repository index: an `entries` map keyed by
//! chart name, each value an ordered list of release records carrying a
//! `created` timestamp and a `version`. The records are sorted ascending by
//! the `created` string and the last one wins.
//!
//! The sort is lexical on the raw string, not a timestamp parse. Zero-padded
//! ISO-8601 values order correctly this way, and parsing could reorder ties,
//! so the string sort is kept as-is.

use crate::error::ExtractError;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Chart repository index document
#[derive(Debug, Deserialize)]
struct FeedIndex {
    /// Release records per chart name
    entries: BTreeMap<String, Vec<FeedRelease>>,
}

/// One release record in the index
#[derive(Debug, Clone, Deserialize)]
struct FeedRelease {
    /// Publication timestamp, compared as a plain string
    created: String,
    /// Version published at that time
    version: String,
}

/// Extract the most recently created release version for `dependency`.
pub fn extract_version(body: &str, dependency: &str, url: &str) -> Result<String, ExtractError> {
    let index: FeedIndex = serde_yaml::from_str(body)
        .map_err(|e| ExtractError::parse(dependency, url, e.to_string()))?;

    let mut releases = index
        .entries
        .get(dependency)
        .ok_or_else(|| ExtractError::missing_entry(dependency, url))?
        .clone();

    // Stable sort: equal timestamps keep their input order
    releases.sort_by(|a, b| a.created.cmp(&b.created));

    releases
        .last()
        .map(|release| release.version.clone())
        .ok_or_else(|| ExtractError::empty_entry(dependency, url))
}
