//! Stylesheet export settings.

use serde::{Deserialize, Serialize};
use themekit_common::ThemeMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesheetConfig {
    /// Active mode of themes built from settings, and so of their CSS.
    pub mode: ThemeMode,
}

impl Default for StylesheetConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::System,
        }
    }
}
