//! Directory Ensurer: idempotent create-if-absent

use crate::error::{InspectError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Create `path` and any missing parents, then return its canonical form.
///
/// Succeeds when the directory already exists. Fails with
/// [`InspectError::NotADirectory`] naming the first existing non-directory
/// found at `path` or one of its ancestors.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(InspectError::NotFound(path.to_path_buf()));
    }

    if let Err(err) = fs::create_dir_all(path) {
        if err.kind() == io::ErrorKind::PermissionDenied {
            return Err(InspectError::AccessDenied(path.to_path_buf()));
        }
        if let Some(blocker) = non_directory_ancestor(path) {
            return Err(InspectError::NotADirectory(blocker));
        }
        return Err(InspectError::from_io(err, path));
    }

    let resolved = resolve(path)?;
    debug!(path = %resolved.display(), "Ensured directory");
    Ok(resolved)
}

/// Canonicalize without the `\\?\` prefix on Windows.
pub fn resolve(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| InspectError::from_io(e, path))
}

/// Deepest existing component of `path` if it is not a directory.
///
/// A link that does not resolve (dangling or looping) still occupies its
/// name and counts as a non-directory.
fn non_directory_ancestor(path: &Path) -> Option<PathBuf> {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        let metadata = fs::metadata(ancestor).or_else(|_| fs::symlink_metadata(ancestor));
        if let Ok(metadata) = metadata {
            return (!metadata.is_dir()).then(|| ancestor.to_path_buf());
        }
    }
    None
}
