//! Core domain types
//!
//! This module provides:
//! - Dependency declaration record
//! - Upstream source classification
//! - Version change and run summary records

mod dependency;
mod source;
mod summary;

pub use dependency::Dependency;
pub use source::{Source, SourceRegistry};
pub use summary::{UpdateSummary, VersionChange};
