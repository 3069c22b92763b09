//! Random palette generator defaults.

use serde::{Deserialize, Serialize};
use themekit_color::ColorHarmony;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub harmony: ColorHarmony,
    /// Generate dark palettes instead of light ones.
    pub dark: bool,
}
