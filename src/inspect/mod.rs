//! Path Inspector
//!
//! Classifies a path as file or directory. Files yield a [`FileReport`] built
//! from their metadata; directories are walked once in full and yield a
//! [`DirectoryReport`] with file count, directory count and total file size.

pub mod report;
pub mod walker;

pub use report::{DirectoryReport, FileReport, Report};
pub use walker::{Entry, Walker, WalkerConfig};

use crate::error::{InspectError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Inspect `path` with the default walker configuration.
///
/// Fails with [`InspectError::NotFound`] when nothing exists at `path`
/// (the empty path included).
pub fn search(path: impl AsRef<Path>) -> Result<Report> {
    search_with(path, &WalkerConfig::default())
}

/// Inspect `path`, walking directories according to `config`.
pub fn search_with(path: impl AsRef<Path>, config: &WalkerConfig) -> Result<Report> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| InspectError::from_io(e, path))?;

    if metadata.is_dir() {
        let entries = Walker::with_config(path, config.clone()).walk()?;
        let report = DirectoryReport::from_entries(path, &entries);
        debug!(
            path = %path.display(),
            total_files = report.total_files,
            total_dirs = report.total_dirs,
            total_size = report.total_size,
            "Inspected directory"
        );
        return Ok(Report::Directory(report));
    }

    let report = FileReport::from_metadata(path, &metadata)?;
    debug!(path = %path.display(), size = report.size, "Inspected file");
    Ok(Report::File(report))
}
