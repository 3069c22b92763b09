//! Theme file types.

use std::path::Path;

use serde::{Deserialize, Serialize};
use themekit_common::{ColorPalette, HexColor, PaletteRole, ThemeMode};

use crate::elements::ElementStyleOverride;
use crate::presets::PalettePreset;

/// A light/dark palette pair and which one is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeVariants {
    pub light: ColorPalette,
    pub dark: ColorPalette,
    pub active_mode: ThemeMode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub element_overrides: Vec<ElementStyleOverride>,
}

impl ThemeVariants {
    pub fn new(light: ColorPalette, dark: ColorPalette, active_mode: ThemeMode) -> Self {
        Self {
            light,
            dark,
            active_mode,
            element_overrides: Vec::new(),
        }
    }

    pub fn from_preset(preset: &PalettePreset, active_mode: ThemeMode) -> Self {
        Self::new(preset.light.clone(), preset.dark.clone(), active_mode)
    }

    /// The palette currently shown. `System` follows `prefers_dark`.
    pub fn active_palette(&self, prefers_dark: bool) -> &ColorPalette {
        match self.active_mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
            ThemeMode::System if prefers_dark => &self.dark,
            ThemeMode::System => &self.light,
        }
    }

    /// The palette that edits apply to: dark in dark mode, light otherwise.
    pub fn editable_palette_mut(&mut self) -> &mut ColorPalette {
        match self.active_mode {
            ThemeMode::Dark => &mut self.dark,
            ThemeMode::Light | ThemeMode::System => &mut self.light,
        }
    }

    /// Insert or replace the override for `over.element_id`.
    pub fn set_element_override(&mut self, over: ElementStyleOverride) {
        match self
            .element_overrides
            .iter_mut()
            .find(|existing| existing.element_id == over.element_id)
        {
            Some(existing) => *existing = over,
            None => self.element_overrides.push(over),
        }
    }

    /// Replace one role in the editable palette.
    pub fn set_color(&mut self, role: PaletteRole, color: HexColor) {
        let palette = self.editable_palette_mut();
        palette.colors = palette.colors.with(role, color);
    }
}

/// On-disk encoding of a theme file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFormat {
    Json,
    Yaml,
}

impl ThemeFormat {
    /// YAML for `.yaml`/`.yml` (any case), JSON otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => ThemeFormat::Yaml,
            _ => ThemeFormat::Json,
        }
    }
}
