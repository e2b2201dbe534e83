//! Inspection result records

use crate::error::{InspectError, Result};
use crate::inspect::walker::Entry;
use serde::{Deserialize, Serialize};
use std::fs::Metadata;
use std::path::{Component, Path};
use std::time::{SystemTime, UNIX_EPOCH};

/// Metadata of a single file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub name: String,
    pub size: u64,
    /// Final suffix including its dot (".txt"), empty if none
    pub extension: String,
    /// Seconds since the Unix epoch
    pub modified: f64,
}

/// Aggregate totals of a directory subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryReport {
    pub name: String,
    pub total_files: u64,
    pub total_dirs: u64,
    /// Sum of file sizes only
    pub total_size: u64,
}

/// Result of inspecting a path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Report {
    File(FileReport),
    Directory(DirectoryReport),
}

impl Report {
    pub fn name(&self) -> &str {
        match self {
            Report::File(file) => &file.name,
            Report::Directory(dir) => &dir.name,
        }
    }

    pub fn as_file(&self) -> Option<&FileReport> {
        match self {
            Report::File(file) => Some(file),
            Report::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryReport> {
        match self {
            Report::Directory(dir) => Some(dir),
            Report::File(_) => None,
        }
    }
}

impl FileReport {
    pub(crate) fn from_metadata(path: &Path, metadata: &Metadata) -> Result<Self> {
        let modified = metadata
            .modified()
            .map_err(|e| InspectError::from_io(e, path))?;

        Ok(Self {
            name: file_name(path),
            size: metadata.len(),
            extension: extension(path),
            modified: epoch_seconds(modified),
        })
    }
}

impl DirectoryReport {
    /// Aggregate one walk in a single pass.
    pub(crate) fn from_entries(path: &Path, entries: &[Entry]) -> Self {
        let mut report = Self {
            name: file_name(path),
            total_files: 0,
            total_dirs: 0,
            total_size: 0,
        };

        for entry in entries {
            match entry {
                Entry::File { size, .. } => {
                    report.total_files += 1;
                    report.total_size += size;
                }
                Entry::Directory { .. } => report.total_dirs += 1,
            }
        }

        report
    }
}

/// Final path component, empty when there is none (e.g. "/" or ".").
///
/// A trailing ".." is reported as-is.
pub fn file_name(path: &Path) -> String {
    if let Some(Component::ParentDir) = path.components().next_back() {
        return "..".to_string();
    }
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Final suffix of the file name with its leading dot.
///
/// A dot at position zero (".bashrc") or at the very end ("archive.") does
/// not start a suffix.
pub fn extension(path: &Path) -> String {
    let name = file_name(path);
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx < name.len() - 1 => name[idx..].to_string(),
        _ => String::new(),
    }
}

fn epoch_seconds(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_secs_f64(),
        Err(before) => -before.duration().as_secs_f64(),
    }
}
