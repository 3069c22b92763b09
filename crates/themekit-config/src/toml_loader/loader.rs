//! Core TOML loading: read from a path or the platform default.

use crate::schema::ThemekitConfig;
use crate::validation;
use std::path::Path;
use themekit_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load settings from a specific TOML file.
///
/// Missing fields take their defaults. A config that parses but fails
/// validation is returned as-is after logging a warning.
pub fn load_from_path(path: &Path) -> Result<ThemekitConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ThemekitConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed values");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load settings from the platform-specific default path.
///
/// On Linux: `~/.config/themekit/config.toml`
/// On macOS: `~/Library/Application Support/themekit/config.toml`
///
/// Creates a commented default file when none exists.
pub fn load_default() -> Result<ThemekitConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(ThemekitConfig::default())
        }
        Err(e) => Err(e),
    }
}
