//! Write settings to TOML on disk.

use std::path::Path;

use themekit_common::ConfigError;

use crate::atomic::write_atomic;
use crate::schema::ThemekitConfig;
use crate::toml_loader::default_config_path;

/// Write settings to the platform default path.
pub fn save_config(config: &ThemekitConfig) -> Result<(), ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)
}

/// Serialize settings to pretty TOML and write them atomically to `path`.
pub fn save_config_to_path(config: &ThemekitConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::WriteError(format!("failed to serialize config to TOML: {e}")))?;

    write_atomic(path, &toml_str)?;

    tracing::debug!(path = %path.display(), "config saved to disk");
    Ok(())
}
