//! Error types for path inspection, hashing and directory creation.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InspectError>;

/// Errors surfaced by every public operation
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Access denied: {}", .0.display())]
    AccessDenied(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Symlink loop detected at {}", .0.display())]
    SymlinkLoop(PathBuf),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl InspectError {
    /// Classify an I/O failure on `path` into the error taxonomy.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => InspectError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => InspectError::AccessDenied(path.to_path_buf()),
            _ => InspectError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Classify a walk failure. Loop errors only occur when following links.
    pub(crate) fn from_walk(err: walkdir::Error, root: &Path) -> Self {
        if let Some(ancestor) = err.loop_ancestor() {
            return InspectError::SymlinkLoop(ancestor.to_path_buf());
        }
        let path = err.path().unwrap_or(root).to_path_buf();
        match err.into_io_error() {
            Some(io_err) if is_unresolvable_link(&io_err, &path) => InspectError::SymlinkLoop(path),
            Some(io_err) => InspectError::from_io(io_err, &path),
            None => InspectError::Io {
                path,
                source: io::Error::new(io::ErrorKind::Other, "directory walk failed"),
            },
        }
    }
}

/// A link that exists but cannot be resolved for a reason other than a
/// missing or forbidden target, such as a link pointing at itself.
fn is_unresolvable_link(err: &io::Error, path: &Path) -> bool {
    if matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
    ) {
        return false;
    }
    std::fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

impl From<config::ConfigError> for InspectError {
    fn from(err: config::ConfigError) -> Self {
        InspectError::Config(err.to_string())
    }
}
