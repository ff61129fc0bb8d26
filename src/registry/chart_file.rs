//! Chart-file version extraction
//!
//! The remote body is a chart metadata document in YAML with a single
//! `version` field at its root. That field's value is returned verbatim.

use crate::error::ExtractError;
use serde_yaml::Value;

/// Extract the root `version` field from a fetched chart metadata document.
pub fn extract_version(body: &str, dependency: &str, url: &str) -> Result<String, ExtractError> {
    let doc: Value = serde_yaml::from_str(body)
        .map_err(|e| ExtractError::parse(dependency, url, e.to_string()))?;

    match doc.get("version") {
        Some(Value::String(version)) => Ok(version.clone()),
        Some(_) => Err(ExtractError::parse(
            dependency,
            url,
            "version field is not a string",
        )),
        None => Err(ExtractError::missing_version(dependency, url)),
    }
}
