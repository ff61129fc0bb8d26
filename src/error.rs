//! Application error types using thiserror
//!
//! Error hierarchy:
//! - FetchError: HTTP request failures
//! - SourceError: unrecognized upstream source URLs
//! - ExtractError: fetched body lacks the expected version structure
//! - ManifestError: issues with the local requirements file
//! - CompareError: local and remote version mappings disagree on key sets

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP fetch related errors
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Source URL classification errors
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Version extraction errors
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Local requirements file errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Version mapping comparison errors
    #[error(transparent)]
    Compare(#[from] CompareError),
}

/// Errors raised while fetching a remote document
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to construct the HTTP client
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },

    /// The request never produced a response
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-success status
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response arrived but its body could not be read
    #[error("failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

/// Errors raised while classifying an upstream source URL
#[derive(Error, Debug)]
pub enum SourceError {
    /// The URL matches none of the known source shapes
    #[error("source URL for '{dependency}' is not recognized: {url}")]
    Unrecognized { dependency: String, url: String },
}

/// Errors raised while extracting a version from a fetched body
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The body could not be parsed at all
    #[error("failed to parse document for '{dependency}' from {url}: {message}")]
    Parse {
        dependency: String,
        url: String,
        message: String,
    },

    /// The document parsed but has no usable version field
    #[error("document for '{dependency}' from {url} has no version field")]
    MissingVersion { dependency: String, url: String },

    /// The feed index has no entry for the dependency
    #[error("feed index at {url} has no entry for '{dependency}'")]
    MissingEntry { dependency: String, url: String },

    /// The feed entry exists but lists no releases
    #[error("feed entry for '{dependency}' at {url} lists no releases")]
    EmptyEntry { dependency: String, url: String },
}

/// Errors related to the local requirements file
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Requirements file not found
    #[error("requirements file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the requirements file
    #[error("failed to read requirements file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the requirements file
    #[error("failed to write requirements file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing or serialization error
    #[error("failed to parse YAML in {path}: {message}")]
    YamlError { path: PathBuf, message: String },

    /// The document has no `dependencies` list
    #[error("no dependencies list in {path}")]
    MissingDependencies { path: PathBuf },

    /// A dependency entry is missing its name or version
    #[error("invalid dependency entry in {path}: {message}")]
    InvalidDependency { path: PathBuf, message: String },
}

/// Errors raised when the local and remote version mappings disagree
#[derive(Error, Debug)]
pub enum CompareError {
    /// A local dependency has no resolved remote version
    #[error("no remote version was resolved for '{name}'")]
    MissingRemote { name: String },

    /// A resolved remote version has no local counterpart
    #[error("'{name}' was resolved remotely but is not declared in the requirements file")]
    MissingLocal { name: String },
}

impl FetchError {
    /// Creates a new Transport error
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new Status error
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        FetchError::Status {
            url: url.into(),
            status,
        }
    }
}

impl SourceError {
    /// Creates a new Unrecognized error
    pub fn unrecognized(dependency: impl Into<String>, url: impl Into<String>) -> Self {
        SourceError::Unrecognized {
            dependency: dependency.into(),
            url: url.into(),
        }
    }
}

impl ExtractError {
    /// Creates a new Parse error
    pub fn parse(
        dependency: impl Into<String>,
        url: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ExtractError::Parse {
            dependency: dependency.into(),
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingVersion error
    pub fn missing_version(dependency: impl Into<String>, url: impl Into<String>) -> Self {
        ExtractError::MissingVersion {
            dependency: dependency.into(),
            url: url.into(),
        }
    }

    /// Creates a new MissingEntry error
    pub fn missing_entry(dependency: impl Into<String>, url: impl Into<String>) -> Self {
        ExtractError::MissingEntry {
            dependency: dependency.into(),
            url: url.into(),
        }
    }

    /// Creates a new EmptyEntry error
    pub fn empty_entry(dependency: impl Into<String>, url: impl Into<String>) -> Self {
        ExtractError::EmptyEntry {
            dependency: dependency.into(),
            url: url.into(),
        }
    }
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new YamlError
    pub fn yaml_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::YamlError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidDependency error
    pub fn invalid_dependency(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::InvalidDependency {
            path: path.into(),
            message: message.into(),
        }
    }
}
