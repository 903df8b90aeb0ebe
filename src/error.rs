//! Application error types using thiserror
//!
//! Error hierarchy:
//! - MetadataError: A metadata record could not be read (recovered locally)
//! - DiscoveryError: The search path could not be determined or listed
//! - ConfigError: Invalid command-line configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Search path related errors
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors reading a metadata record. These never abort an audit: the
/// source is skipped.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Record file does not exist
    #[error("metadata record not found: {path}")]
    NotFound { path: PathBuf },

    /// Record file exists but could not be read
    #[error("failed to read metadata record {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors determining where installed packages live
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The interpreter could not be started
    #[error("failed to run interpreter '{program}': {source}")]
    InterpreterLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The interpreter ran but reported failure
    #[error("interpreter '{program}' failed: {stderr}")]
    InterpreterFailed { program: String, stderr: String },

    /// A search path directory exists but could not be listed
    #[error("failed to list {path}: {source}")]
    ListError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Exclusion list contained an empty name
    #[error("invalid exclusion list '{value}': package names must not be empty")]
    EmptyExclusion { value: String },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

impl MetadataError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        MetadataError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MetadataError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates the matching error for an I/O failure on `path`
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(path)
        } else {
            Self::read_error(path, source)
        }
    }
}

impl DiscoveryError {
    /// Creates a new InterpreterLaunch error
    pub fn interpreter_launch(program: impl Into<String>, source: std::io::Error) -> Self {
        DiscoveryError::InterpreterLaunch {
            program: program.into(),
            source,
        }
    }

    /// Creates a new InterpreterFailed error
    pub fn interpreter_failed(program: impl Into<String>, stderr: impl Into<String>) -> Self {
        DiscoveryError::InterpreterFailed {
            program: program.into(),
            stderr: stderr.into(),
        }
    }

    /// Creates a new ListError
    pub fn list_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiscoveryError::ListError {
            path: path.into(),
            source,
        }
    }
}
