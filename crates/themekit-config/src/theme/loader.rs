//! Theme file loading.

use std::path::Path;

use themekit_common::ConfigError;
use tracing::info;

use super::types::{ThemeFormat, ThemeVariants};

/// Load a theme file, choosing the decoder from the extension.
pub fn load_theme_file(path: &Path) -> Result<ThemeVariants, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read theme file {}: {e}", path.display()))
    })?;

    let theme: ThemeVariants = match ThemeFormat::from_path(path) {
        ThemeFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to parse theme YAML {}: {e}",
                path.display()
            ))
        })?,
        ThemeFormat::Json => serde_json::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to parse theme JSON {}: {e}",
                path.display()
            ))
        })?,
    };

    info!("loaded theme from {}", path.display());
    Ok(theme)
}
