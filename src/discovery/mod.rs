//! Installed-package metadata discovery
//!
//! This module provides:
//! - Detection of metadata directories on a search path
//! - A record reader seam over the file system
//! - Loading one metadata source into a `Package`

mod detector;
mod reader;

pub use detector::{detect_in_directory, discover_sources};
pub use reader::{FsRecordReader, RecordReader};

use crate::domain::Package;
use crate::parser::{extract_single_record, extract_split_record};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Record file of a `*.dist-info` directory
pub const METADATA_FILE: &str = "METADATA";
/// Header record of a `*.egg-info` directory
pub const PKG_INFO_FILE: &str = "PKG-INFO";
/// Requirements record of a `*.egg-info` directory
pub const REQUIRES_FILE: &str = "requires.txt";

/// Shape of a metadata source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// `*.dist-info`: one record holding name, version and requirements
    SingleRecord,
    /// `*.egg-info`: header record plus a separate requirements record
    SplitRecord,
}

impl SourceKind {
    /// Classify a directory entry by its name
    pub fn from_entry_name(name: &str) -> Option<Self> {
        if name.ends_with(".dist-info") {
            Some(SourceKind::SingleRecord)
        } else if name.ends_with(".egg-info") {
            Some(SourceKind::SplitRecord)
        } else {
            None
        }
    }
}

/// A discovered metadata directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataSource {
    /// Path of the `*.dist-info` / `*.egg-info` entry
    pub path: PathBuf,
    /// How its records are laid out
    pub kind: SourceKind,
}

impl MetadataSource {
    /// Create a new MetadataSource
    pub fn new(path: impl Into<PathBuf>, kind: SourceKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Load the package this source describes.
    ///
    /// Unreadable records are not errors: they yield None, as do records
    /// without both a name and a version.
    pub fn load(&self, reader: &dyn RecordReader) -> Option<Package> {
        let package = match self.kind {
            SourceKind::SingleRecord => {
                let lines = read_record(reader, &self.path.join(METADATA_FILE))?;
                extract_single_record(lines)
            }
            SourceKind::SplitRecord => {
                let header = read_record(reader, &self.path.join(PKG_INFO_FILE))?;
                let requirements = read_record(reader, &self.path.join(REQUIRES_FILE));
                extract_split_record(header, requirements)
            }
        };

        if package.is_none() {
            debug!("{}: no package extracted", self.path.display());
        }
        package
    }
}

fn read_record(reader: &dyn RecordReader, path: &Path) -> Option<Vec<String>> {
    reader
        .read_lines(path)
        .inspect_err(|e| debug!("{}", e))
        .ok()
}
