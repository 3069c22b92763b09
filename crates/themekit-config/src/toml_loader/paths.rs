//! Config path resolution and default file creation.

use std::path::{Path, PathBuf};
use themekit_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;
use crate::atomic::write_atomic;

/// Return the platform config path: `<config_dir>/themekit/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("themekit").join("config.toml"))
}

/// Write the commented default template to `path`.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    write_atomic(path, default_config_toml())?;
    info!("created default config at {}", path.display());
    Ok(())
}
