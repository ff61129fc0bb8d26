//! Local requirements file handling
//!
//! This module provides:
//! - Chart path resolution to the requirements file
//! - Reader for the declared dependency versions
//! - Writer that patches changed versions in place

mod reader;
mod writer;

pub use reader::read_local;
pub use writer::{ManifestWriter, WriteResult};

use std::path::{Path, PathBuf};

/// Name of the manifest file inside a chart directory
pub const REQUIREMENTS_FILE: &str = "requirements.yaml";

/// Resolve a chart argument to its requirements file path.
///
/// A directory resolves to `<dir>/requirements.yaml`; anything else is taken
/// as a direct path to the file.
pub fn requirements_path(chart: &Path) -> PathBuf {
    if chart.is_dir() {
        chart.join(REQUIREMENTS_FILE)
    } else {
        chart.to_path_buf()
    }
}
