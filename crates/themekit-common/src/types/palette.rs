use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::HexColor;

/// One of the seven semantic slots every palette fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaletteRole {
    Primary,
    Secondary,
    Background,
    Surface,
    Text,
    TextMuted,
    Border,
}

impl PaletteRole {
    pub const ALL: [PaletteRole; 7] = [
        PaletteRole::Primary,
        PaletteRole::Secondary,
        PaletteRole::Background,
        PaletteRole::Surface,
        PaletteRole::Text,
        PaletteRole::TextMuted,
        PaletteRole::Border,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteRole::Primary => "primary",
            PaletteRole::Secondary => "secondary",
            PaletteRole::Background => "background",
            PaletteRole::Surface => "surface",
            PaletteRole::Text => "text",
            PaletteRole::TextMuted => "textMuted",
            PaletteRole::Border => "border",
        }
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seven role colors of a palette. Always complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColors {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub background: HexColor,
    pub surface: HexColor,
    pub text: HexColor,
    pub text_muted: HexColor,
    pub border: HexColor,
}

impl PaletteColors {
    pub fn get(&self, role: PaletteRole) -> HexColor {
        match role {
            PaletteRole::Primary => self.primary,
            PaletteRole::Secondary => self.secondary,
            PaletteRole::Background => self.background,
            PaletteRole::Surface => self.surface,
            PaletteRole::Text => self.text,
            PaletteRole::TextMuted => self.text_muted,
            PaletteRole::Border => self.border,
        }
    }

    /// Return a copy with one role replaced.
    pub fn with(mut self, role: PaletteRole, color: HexColor) -> Self {
        match role {
            PaletteRole::Primary => self.primary = color,
            PaletteRole::Secondary => self.secondary = color,
            PaletteRole::Background => self.background = color,
            PaletteRole::Surface => self.surface = color,
            PaletteRole::Text => self.text = color,
            PaletteRole::TextMuted => self.text_muted = color,
            PaletteRole::Border => self.border = color,
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaletteRole, HexColor)> + '_ {
        PaletteRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

/// A named bundle of role colors. The name is a display label only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub name: String,
    pub colors: PaletteColors,
}

impl ColorPalette {
    pub fn new(name: impl Into<String>, colors: PaletteColors) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }
}

/// Which palette of a light/dark pair is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        })
    }
}
