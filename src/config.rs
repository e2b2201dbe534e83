//! Configuration System
//!
//! Layered configuration for the `ufs` binary: built-in defaults, then either
//! the global config file or an explicit `--config` file. Library callers can
//! construct [`UfsConfig`] directly.

use crate::error::InspectError;
use crate::hasher::{HashAlgorithm, DEFAULT_ALGORITHM};
use crate::inspect::WalkerConfig;
use crate::logging::{self, LoggingConfig};
use serde::{Deserialize, Serialize};

mod loader;
mod merge_policy;
mod sources;

pub use loader::ConfigLoader;
pub use sources::{global_config_path, CONFIG_DIR_ENV};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UfsConfig {
    /// Directory walk settings for `search`
    #[serde(default)]
    pub walker: WalkerConfig,

    /// Digest settings for `hash`
    #[serde(default)]
    pub hashing: HashingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Digest settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Algorithm used when `hash` is run without `--algorithm`
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

fn default_algorithm() -> String {
    DEFAULT_ALGORITHM.to_string()
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Hashing(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Hashing(msg) => write!(f, "hashing: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl UfsConfig {
    /// Validate the entire configuration, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.hashing.algorithm.parse::<HashAlgorithm>() {
            errors.push(ValidationError::Hashing(e.to_string()));
        }
        if let Err(e) = logging::validate_format(&self.logging.format) {
            errors.push(ValidationError::Logging(e.to_string()));
        }
        if let Err(e) = logging::validate_output(&self.logging.output) {
            errors.push(ValidationError::Logging(e.to_string()));
        }
        if self.logging.output == "file" && self.logging.file.is_none() {
            errors.push(ValidationError::Logging(
                "output is 'file' but no file path is set".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding all problems into a single error
    pub fn validated(self) -> Result<Self, InspectError> {
        self.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            InspectError::Config(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        Ok(self)
    }
}
