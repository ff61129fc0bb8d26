//! Version comparison
//!
//! Decides which dependencies are behind upstream. Comparison is exact string
//! inequality; `"v1.2.3"` and `"1.2.3"` are different versions here even
//! though a semantic comparison would call them equal.

use crate::error::CompareError;
use std::collections::BTreeMap;

/// Diff the local and remote version mappings.
///
/// Returns the names whose versions differ, in name order. The two mappings
/// must cover the same key set: a name present on only one side is a
/// configuration mistake and errors out rather than being skipped.
pub fn diff(
    local: &BTreeMap<String, String>,
    remote: &BTreeMap<String, String>,
) -> Result<Vec<String>, CompareError> {
    let mut behind = Vec::new();

    for (name, local_version) in local {
        let remote_version = remote
            .get(name)
            .ok_or_else(|| CompareError::MissingRemote { name: name.clone() })?;

        if local_version != remote_version {
            behind.push(name.clone());
        }
    }

    for name in remote.keys() {
        if !local.contains_key(name) {
            return Err(CompareError::MissingLocal { name: name.clone() });
        }
    }

    Ok(behind)
}
