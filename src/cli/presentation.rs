//! Presentation: text and JSON rendering of command results.

use crate::error::InspectError;
use crate::hasher::HashAlgorithm;
use crate::inspect::{DirectoryReport, FileReport, Report};
use chrono::{DateTime, SecondsFormat, Utc};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;
use std::path::Path;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, InspectError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| InspectError::Config(format!("Failed to serialize output: {}", e)))
}

pub fn format_report(report: &Report, format: &str) -> Result<String, InspectError> {
    if format == "json" {
        return to_json(report);
    }
    Ok(match report {
        Report::File(file) => format_file_report_text(file),
        Report::Directory(dir) => format_directory_report_text(dir),
    })
}

fn format_file_report_text(report: &FileReport) -> String {
    let extension = if report.extension.is_empty() {
        "-".to_string()
    } else {
        report.extension.clone()
    };

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["File", "Size (bytes)", "Extension", "Modified"]);
    table.add_row(vec![
        report.name.clone(),
        report.size.to_string(),
        extension,
        format_timestamp(report.modified),
    ]);
    table.to_string()
}

fn format_directory_report_text(report: &DirectoryReport) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Directory", "Files", "Directories", "Total size (bytes)"]);
    table.add_row(vec![
        report.name.clone(),
        report.total_files.to_string(),
        report.total_dirs.to_string(),
        report.total_size.to_string(),
    ]);
    table.to_string()
}

/// RFC 3339 in UTC; falls back to raw seconds outside chrono's range.
pub fn format_timestamp(epoch_seconds: f64) -> String {
    let secs = epoch_seconds.floor();
    let nanos = ((epoch_seconds - secs) * 1e9) as u32;
    DateTime::<Utc>::from_timestamp(secs as i64, nanos.min(999_999_999))
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| epoch_seconds.to_string())
}

pub fn format_digest(
    path: &Path,
    algorithm: HashAlgorithm,
    digest: &str,
    format: &str,
) -> Result<String, InspectError> {
    if format == "json" {
        return to_json(&serde_json::json!({
            "path": path.to_string_lossy(),
            "algorithm": algorithm.name(),
            "digest": digest,
        }));
    }
    Ok(digest.to_string())
}

pub fn format_ensured_dir(path: &Path, format: &str) -> Result<String, InspectError> {
    if format == "json" {
        return to_json(&serde_json::json!({ "path": path.to_string_lossy() }));
    }
    Ok(path.display().to_string())
}

pub fn format_algorithms(format: &str) -> Result<String, InspectError> {
    let names: Vec<&str> = HashAlgorithm::ALL.iter().map(|a| a.name()).collect();
    if format == "json" {
        return to_json(&names);
    }
    Ok(names.join("\n"))
}
