//! Settings schema.
//!
//! `[extraction]` and `[contrast]` deserialize straight into the option
//! types of `themekit-color`; the other sections are defined here.

mod generator;
mod stylesheet;

pub use generator::GeneratorConfig;
pub use stylesheet::StylesheetConfig;

use serde::{Deserialize, Serialize};
use themekit_color::{
    generate_random_palette, suggested_fixes_with_targets, ContrastTargets, ExtractOptions,
    SuggestedFixes,
};
use themekit_common::{ColorPalette, PaletteColors};

use crate::presets::{preset_by_id, PalettePreset};
use crate::stylesheet::generate_css;
use crate::theme::ThemeVariants;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemekitConfig {
    pub extraction: ExtractOptions,
    pub contrast: ContrastTargets,
    pub generator: GeneratorConfig,
    pub stylesheet: StylesheetConfig,
}

impl ThemekitConfig {
    /// Random palette using the configured harmony and mode.
    pub fn generate_palette(&self, base_hue: Option<f64>) -> ColorPalette {
        generate_random_palette(self.generator.harmony, self.generator.dark, base_hue)
    }

    /// Theme seeded from `preset` with the configured stylesheet mode.
    pub fn theme_from_preset(&self, preset: &PalettePreset) -> ThemeVariants {
        ThemeVariants::from_preset(preset, self.stylesheet.mode)
    }

    /// CSS for a built-in preset in the configured mode. `None` for an unknown id.
    pub fn preset_css(&self, preset_id: &str) -> Option<String> {
        preset_by_id(preset_id).map(|preset| generate_css(&self.theme_from_preset(&preset)))
    }

    /// Contrast fixes using the configured targets.
    pub fn suggested_fixes(&self, palette: &PaletteColors) -> SuggestedFixes {
        suggested_fixes_with_targets(palette, self.contrast)
    }
}
