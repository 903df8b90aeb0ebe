//! Line-oriented access to metadata record files

use crate::error::MetadataError;
use std::path::Path;

/// Supplies the lines of a metadata record file
pub trait RecordReader {
    /// Read all lines of the record at `path`
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, MetadataError>;
}

/// Reads records from the file system. Invalid UTF-8 is replaced, not rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRecordReader;

impl FsRecordReader {
    /// Create a new file system reader
    pub fn new() -> Self {
        Self
    }
}

impl RecordReader for FsRecordReader {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, MetadataError> {
        let bytes = std::fs::read(path).map_err(|e| MetadataError::from_io(path, e))?;
        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect())
    }
}
