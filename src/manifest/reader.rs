//! Requirements file reader

use crate::domain::Dependency;
use crate::error::ManifestError;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Read the declared dependency versions out of a requirements file.
///
/// Walks the `dependencies` list in file order and maps each entry's name to
/// its version. If a name appears twice, the first occurrence wins.
pub fn read_local(path: &Path) -> Result<BTreeMap<String, String>, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::not_found(path)
        } else {
            ManifestError::read_error(path, e)
        }
    })?;

    let doc: Value = serde_yaml::from_str(&content)
        .map_err(|e| ManifestError::yaml_error(path, e.to_string()))?;

    let dependencies = doc
        .get("dependencies")
        .and_then(Value::as_sequence)
        .ok_or_else(|| ManifestError::MissingDependencies {
            path: path.to_path_buf(),
        })?;

    let mut versions = BTreeMap::new();

    for (index, entry) in dependencies.iter().enumerate() {
        let declaration: Dependency =
            serde_yaml::from_value(entry.clone()).map_err(|e| {
                ManifestError::invalid_dependency(path, format!("entry {}: {}", index, e))
            })?;

        versions
            .entry(declaration.name)
            .or_insert(declaration.version);
    }

    Ok(versions)
}
