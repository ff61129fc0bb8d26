//! Dependency declaration record

use serde::{Deserialize, Serialize};
use std::fmt;

/// One declared chart dependency: a name and its pinned version.
///
/// Identity is the name. Uniqueness within a requirements file is assumed,
/// not enforced; the first occurrence wins on lookup and on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Chart name
    pub name: String,
    /// Pinned version string, compared by exact equality
    pub version: String,
}

impl Dependency {
    /// Creates a new dependency declaration
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
