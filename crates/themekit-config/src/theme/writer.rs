//! Theme file saving.

use std::path::Path;

use themekit_common::ConfigError;

use super::types::{ThemeFormat, ThemeVariants};
use crate::atomic::write_atomic;

/// Write a theme file atomically, as YAML for `.yaml`/`.yml` and JSON otherwise.
pub fn save_theme_file(theme: &ThemeVariants, path: &Path) -> Result<(), ConfigError> {
    let content = match ThemeFormat::from_path(path) {
        ThemeFormat::Yaml => serde_yaml::to_string(theme)
            .map_err(|e| ConfigError::WriteError(format!("failed to serialize theme: {e}")))?,
        ThemeFormat::Json => serde_json::to_string_pretty(theme)
            .map_err(|e| ConfigError::WriteError(format!("failed to serialize theme: {e}")))?,
    };

    write_atomic(path, &content)?;

    tracing::debug!(path = %path.display(), "theme saved to disk");
    Ok(())
}
