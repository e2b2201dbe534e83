//! Configuration loading facade

use super::merge_policy::builder_with_defaults;
use super::sources::{add_explicit_file, add_global_file};
use super::UfsConfig;
use crate::error::InspectError;
use std::path::Path;

/// Loads [`UfsConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults overlaid with the global config file, if present.
    pub fn load() -> Result<UfsConfig, InspectError> {
        let builder = add_global_file(builder_with_defaults()?);
        let config: UfsConfig = builder.build()?.try_deserialize()?;
        config.validated()
    }

    /// Defaults overlaid with `path` only. The global file is not read.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<UfsConfig, InspectError> {
        let builder = add_explicit_file(builder_with_defaults()?, path.as_ref());
        let config: UfsConfig = builder.build()?.try_deserialize()?;
        config.validated()
    }
}
