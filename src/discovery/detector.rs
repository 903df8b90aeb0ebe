//! Metadata source detection on a search path
//!
//! Features:
//! - Detects `*.dist-info` directories (single-file `METADATA` records)
//! - Detects `*.egg-info` directories (`PKG-INFO` + `requires.txt`)
//! - Produces a deterministic order: search path order, then dist-info
//!   before egg-info, then file name

use super::{MetadataSource, SourceKind};
use crate::error::DiscoveryError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Detect all metadata sources on the search path.
///
/// Directories that do not exist are skipped; directories that cannot be
/// listed are skipped with a warning.
pub fn discover_sources(search_path: &[PathBuf]) -> Vec<MetadataSource> {
    let mut sources = Vec::new();

    for dir in search_path {
        if !dir.is_dir() {
            debug!("skipping search path entry {}: not a directory", dir.display());
            continue;
        }

        match detect_in_directory(dir) {
            Ok(found) => {
                debug!("{}: {} metadata source(s)", dir.display(), found.len());
                sources.extend(found);
            }
            Err(e) => warn!("{}", e),
        }
    }

    sources
}

/// Detect metadata sources directly inside one directory
pub fn detect_in_directory(dir: &Path) -> Result<Vec<MetadataSource>, DiscoveryError> {
    let entries = std::fs::read_dir(dir).map_err(|e| DiscoveryError::list_error(dir, e))?;

    let mut dist_infos = Vec::new();
    let mut egg_infos = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| DiscoveryError::list_error(dir, e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        match SourceKind::from_entry_name(name) {
            Some(SourceKind::SingleRecord) => dist_infos.push(entry.path()),
            Some(SourceKind::SplitRecord) => egg_infos.push(entry.path()),
            None => {}
        }
    }

    dist_infos.sort();
    egg_infos.sort();

    let sources = dist_infos
        .into_iter()
        .map(|path| MetadataSource::new(path, SourceKind::SingleRecord))
        .chain(
            egg_infos
                .into_iter()
                .map(|path| MetadataSource::new(path, SourceKind::SplitRecord)),
        )
        .collect();

    Ok(sources)
}
