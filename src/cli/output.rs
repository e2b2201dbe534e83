//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::InspectError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &InspectError) -> String {
    match e {
        InspectError::UnsupportedAlgorithm(_) => {
            format!("{} (run `ufs algorithms` to list supported names)", e)
        }
        InspectError::SymlinkLoop(_) => {
            format!("{} (retry without --follow-symlinks)", e)
        }
        _ => e.to_string(),
    }
}
