//! Run result records

use serde::Serialize;

/// A single detected version change for one dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionChange {
    /// Dependency name
    pub name: String,
    /// Version currently recorded in the requirements file
    pub local: String,
    /// Latest version discovered upstream
    pub remote: String,
}

impl VersionChange {
    /// Creates a new version change record
    pub fn new(
        name: impl Into<String>,
        local: impl Into<String>,
        remote: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            local: local.into(),
            remote: remote.into(),
        }
    }
}

/// Summary of one complete run
#[derive(Debug, Clone, Serialize)]
pub struct UpdateSummary {
    /// Detected version changes, in requirements-file name order
    pub changes: Vec<VersionChange>,
    /// Whether the run was a dry run
    pub dry_run: bool,
    /// Whether the requirements file was actually rewritten
    pub file_modified: bool,
}

impl UpdateSummary {
    /// Creates a summary with no detected changes
    pub fn up_to_date(dry_run: bool) -> Self {
        Self {
            changes: Vec::new(),
            dry_run,
            file_modified: false,
        }
    }

    /// Returns true if any dependency was behind its upstream version
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}
