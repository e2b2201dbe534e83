//! CLI route: single route table and run context. Dispatches to the library
//! operations and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_algorithms, format_digest, format_ensured_dir, format_report,
};
use crate::config::{ConfigLoader, UfsConfig};
use crate::directory::ensure_dir;
use crate::error::InspectError;
use crate::hasher::{file_hash_with, HashAlgorithm};
use crate::inspect::{search_with, WalkerConfig};
use std::path::Path;
use tracing::info;

/// Runtime context for CLI execution: the resolved configuration.
pub struct RunContext {
    config: UfsConfig,
}

impl RunContext {
    /// Load configuration from `config_path`, or from the global file when absent.
    pub fn new(config_path: Option<&Path>) -> Result<Self, InspectError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: UfsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UfsConfig {
        &self.config
    }

    /// Run one command and render its result in `format` ("text" or "json").
    pub fn execute(&self, command: &Commands, format: &str) -> Result<String, InspectError> {
        match command {
            Commands::Search {
                path,
                follow_symlinks,
                no_follow_symlinks,
                max_depth,
            } => {
                let follow = match (*follow_symlinks, *no_follow_symlinks) {
                    (true, _) => true,
                    (_, true) => false,
                    _ => self.config.walker.follow_symlinks,
                };
                let walker = WalkerConfig {
                    follow_symlinks: follow,
                    max_depth: max_depth.or(self.config.walker.max_depth),
                };
                let report = search_with(path, &walker)?;
                info!(path = %path.display(), name = report.name(), "search completed");
                format_report(&report, format)
            }
            Commands::Hash { path, algorithm } => {
                let name = algorithm
                    .as_deref()
                    .unwrap_or(self.config.hashing.algorithm.as_str());
                let algorithm: HashAlgorithm = name.parse()?;
                let digest = file_hash_with(path, algorithm)?;
                info!(path = %path.display(), algorithm = %algorithm, "hash completed");
                format_digest(path, algorithm, &digest, format)
            }
            Commands::EnsureDir { path } => {
                let resolved = ensure_dir(path)?;
                info!(path = %resolved.display(), "ensure-dir completed");
                format_ensured_dir(&resolved, format)
            }
            Commands::Algorithms => format_algorithms(format),
        }
    }
}
