//! Requirements file writer
//!
//! Applies new versions to the dependencies that changed and writes the whole
//! document back. The document is reloaded fresh here rather than reusing the
//! reader's copy, so read and write lifetimes stay uncoupled. The write is a
//! plain in-place overwrite, not an atomic rename, and nothing guards the
//! window between the earlier read and this write; both limits are accepted
//! for a single-operator CLI.

use crate::domain::VersionChange;
use crate::error::ManifestError;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Writer for the requirements file
pub struct ManifestWriter {
    /// Whether to run in dry-run mode (no file modifications)
    dry_run: bool,
}

/// Result of applying changes to a requirements file
#[derive(Debug)]
pub struct WriteResult {
    /// Path to the requirements file
    pub path: PathBuf,
    /// Number of dependency entries whose version was rewritten
    pub updates_applied: usize,
    /// Whether the file was actually modified
    pub file_modified: bool,
}

impl ManifestWriter {
    /// Create a new writer
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Check if this writer is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Overwrite the version of each changed dependency and persist the file.
    ///
    /// Only the first `dependencies` entry matching each name is touched;
    /// every other entry and every other top-level key survives the round
    /// trip. In dry-run mode the document is patched in memory but never
    /// written.
    pub fn apply_changes(
        &self,
        path: &Path,
        changes: &[VersionChange],
    ) -> Result<WriteResult, ManifestError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ManifestError::not_found(path)
            } else {
                ManifestError::read_error(path, e)
            }
        })?;

        let mut doc: Value = serde_yaml::from_str(&content)
            .map_err(|e| ManifestError::yaml_error(path, e.to_string()))?;

        let dependencies = doc
            .get_mut("dependencies")
            .and_then(Value::as_sequence_mut)
            .ok_or_else(|| ManifestError::MissingDependencies {
                path: path.to_path_buf(),
            })?;

        let mut result = WriteResult {
            path: path.to_path_buf(),
            updates_applied: 0,
            file_modified: false,
        };

        for change in changes {
            let entry = dependencies.iter_mut().find(|entry| {
                entry.get("name").and_then(Value::as_str) == Some(change.name.as_str())
            });

            if let Some(entry) = entry {
                if let Some(mapping) = entry.as_mapping_mut() {
                    mapping.insert(
                        Value::String("version".to_string()),
                        Value::String(change.remote.clone()),
                    );
                    result.updates_applied += 1;
                }
            }
        }

        if result.updates_applied > 0 && !self.dry_run {
            let serialized = serde_yaml::to_string(&doc)
                .map_err(|e| ManifestError::yaml_error(path, e.to_string()))?;
            fs::write(path, serialized).map_err(|e| ManifestError::write_error(path, e))?;
            result.file_modified = true;
        }

        Ok(result)
    }
}
