//! Recursive directory walker used by the path inspector

use crate::error::{InspectError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Filesystem entry types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A regular file (or a link resolving to one) with its size in bytes
    File { path: PathBuf, size: u64 },
    /// A directory (or a link resolving to one)
    Directory { path: PathBuf },
}

impl Entry {
    pub fn path(&self) -> &Path {
        match self {
            Entry::File { path, .. } | Entry::Directory { path } => path,
        }
    }
}

/// Walker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Descend into linked directories (default: false, so the walk always terminates)
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Maximum depth below the root (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: impl Into<PathBuf>, config: WalkerConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Enumerate every descendant of the root, excluding the root itself.
    ///
    /// Links are classified by what they point to. Dangling links are
    /// skipped. Entries are sorted by path.
    pub fn walk(&self) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    if is_dangling_link(&err) {
                        debug!(path = ?err.path(), "Skipping dangling symlink");
                        continue;
                    }
                    return Err(InspectError::from_walk(err, &self.root));
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let path = entry.path();
            let metadata = if entry.path_is_symlink() && !self.config.follow_symlinks {
                match fs::metadata(path) {
                    Ok(metadata) => metadata,
                    Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                        return Err(InspectError::AccessDenied(path.to_path_buf()));
                    }
                    Err(err) => {
                        debug!(path = %path.display(), error = %err, "Skipping unresolvable symlink");
                        continue;
                    }
                }
            } else {
                entry
                    .metadata()
                    .map_err(|e| InspectError::from_walk(e, path))?
            };

            if metadata.is_file() {
                entries.push(Entry::File {
                    path: path.to_path_buf(),
                    size: metadata.len(),
                });
            } else if metadata.is_dir() {
                entries.push(Entry::Directory {
                    path: path.to_path_buf(),
                });
            }
            // Sockets, fifos and devices are neither
        }

        entries.sort_by(|a, b| a.path().cmp(b.path()));

        Ok(entries)
    }
}

/// A followed link whose target no longer exists.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    let not_found = err
        .io_error()
        .map(|e| e.kind() == io::ErrorKind::NotFound)
        .unwrap_or(false);
    let is_link = err
        .path()
        .and_then(|p| fs::symlink_metadata(p).ok())
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    not_found && is_link && err.depth() > 0
}
