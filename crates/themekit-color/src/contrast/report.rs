//! Whole-palette contrast checks and batch fixes.

use serde::{Deserialize, Serialize};
use themekit_common::{HexColor, PaletteColors};

use super::{check_contrast, fix_contrast, ContrastResult, AA_LARGE_RATIO, AA_RATIO};

/// Minimum ratios used when suggesting fixes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastTargets {
    /// Applied to `text` and `text_muted` against the background.
    pub text: f64,
    /// Applied to `primary` and `secondary` against the background.
    pub accent: f64,
}

impl Default for ContrastTargets {
    fn default() -> Self {
        Self {
            text: AA_RATIO,
            accent: AA_LARGE_RATIO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteContrastReport {
    pub text_on_background: ContrastResult,
    pub text_muted_on_background: ContrastResult,
    pub primary_on_background: ContrastResult,
    pub secondary_on_background: ContrastResult,
    pub text_on_surface: ContrastResult,
}

/// Grade the text and accent roles against the background (and text against surface).
pub fn check_palette_contrast(palette: &PaletteColors) -> PaletteContrastReport {
    PaletteContrastReport {
        text_on_background: check_contrast(palette.text, palette.background),
        text_muted_on_background: check_contrast(palette.text_muted, palette.background),
        primary_on_background: check_contrast(palette.primary, palette.background),
        secondary_on_background: check_contrast(palette.secondary, palette.background),
        text_on_surface: check_contrast(palette.text, palette.surface),
    }
}

/// Replacement colors for roles that fail their target. `None` means no fix needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedFixes {
    pub text: Option<HexColor>,
    pub text_muted: Option<HexColor>,
    pub primary: Option<HexColor>,
    pub secondary: Option<HexColor>,
}

impl SuggestedFixes {
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.text_muted.is_none()
            && self.primary.is_none()
            && self.secondary.is_none()
    }

    /// A new palette with every suggested fix substituted.
    pub fn apply(&self, palette: &PaletteColors) -> PaletteColors {
        PaletteColors {
            text: self.text.unwrap_or(palette.text),
            text_muted: self.text_muted.unwrap_or(palette.text_muted),
            primary: self.primary.unwrap_or(palette.primary),
            secondary: self.secondary.unwrap_or(palette.secondary),
            ..*palette
        }
    }
}

/// Text at AA (4.5), accents at AA-large (3.0).
pub fn suggested_fixes(palette: &PaletteColors) -> SuggestedFixes {
    suggested_fixes_with_targets(palette, ContrastTargets::default())
}

/// Fixes for roles below `targets`: text and muted text use `targets.text`,
/// primary and secondary use `targets.accent`.
pub fn suggested_fixes_with_targets(
    palette: &PaletteColors,
    targets: ContrastTargets,
) -> SuggestedFixes {
    let fix = |color: HexColor, target: f64| {
        if check_contrast(color, palette.background).ratio >= target {
            None
        } else {
            Some(fix_contrast(color, palette.background, target))
        }
    };

    SuggestedFixes {
        text: fix(palette.text, targets.text),
        text_muted: fix(palette.text_muted, targets.text),
        primary: fix(palette.primary, targets.accent),
        secondary: fix(palette.secondary, targets.accent),
    }
}
