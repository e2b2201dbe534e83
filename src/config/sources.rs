//! Config file sources: the global user file and an explicit file.

use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the platform config directory (mainly for tests)
pub const CONFIG_DIR_ENV: &str = "UFS_CONFIG_DIR";

/// Path to the global config file.
///
/// `$UFS_CONFIG_DIR/config.toml` when set, otherwise `config.toml` in the
/// platform config directory (e.g. `~/.config/ufs/` on Linux).
pub fn global_config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join("config.toml"));
    }
    ProjectDirs::from("", "", "ufs").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the global config file if it exists.
pub fn add_global_file(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    match global_config_path() {
        Some(path) if path.is_file() => {
            debug!(config_path = %path.display(), "Loading global configuration");
            builder.add_source(File::from(path.as_path()).format(FileFormat::Toml).required(false))
        }
        _ => builder,
    }
}

/// Add an explicit config file; it must exist.
pub fn add_explicit_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path).format(FileFormat::Toml).required(true))
}
