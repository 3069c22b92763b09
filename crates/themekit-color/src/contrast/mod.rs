//! WCAG 2.1 contrast scoring and lightness-based remediation.
//!
//! Thresholds: 7:1 (AAA), 4.5:1 (AA) and 3:1 (AA for large text).

mod fix;
mod report;


use std::fmt;

use serde::{Deserialize, Serialize};
use themekit_common::HexColor;

pub use fix::fix_contrast;
pub use report::{
    check_palette_contrast, suggested_fixes, suggested_fixes_with_targets, ContrastTargets,
    PaletteContrastReport, SuggestedFixes,
};

pub const AAA_RATIO: f64 = 7.0;
pub const AA_RATIO: f64 = 4.5;
pub const AA_LARGE_RATIO: f64 = 3.0;

/// Highest WCAG tier a color pair reaches. Ordered `Fail < AaLarge < Aa < Aaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "fail")]
    Fail,
    #[serde(rename = "AA-large")]
    AaLarge,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_RATIO {
            WcagLevel::Aaa
        } else if ratio >= AA_RATIO {
            WcagLevel::Aa
        } else if ratio >= AA_LARGE_RATIO {
            WcagLevel::AaLarge
        } else {
            WcagLevel::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WcagLevel::Fail => "fail",
            WcagLevel::AaLarge => "AA-large",
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived contrast score for a foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    pub ratio: f64,
    pub level: WcagLevel,
    #[serde(rename = "passesAA")]
    pub passes_aa: bool,
    #[serde(rename = "passesAAA")]
    pub passes_aaa: bool,
    #[serde(rename = "passesAALarge")]
    pub passes_aa_large: bool,
}

/// WCAG relative luminance of channels on the 0-255 scale.
pub fn luminance(r: f64, g: f64, b: f64) -> f64 {
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// WCAG relative luminance of a color, in [0, 1].
pub fn relative_luminance(color: HexColor) -> f64 {
    let rgb = color.to_rgb();
    luminance(rgb.r, rgb.g, rgb.b)
}

fn linearize(channel: f64) -> f64 {
    let s = channel / 255.0;
    if s <= 0.03928 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Symmetric contrast ratio in [1, 21].
pub fn contrast_ratio(a: HexColor, b: HexColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Ratio and WCAG grade of `foreground` drawn on `background`.
///
/// A higher grade implies every lower flag: AAA also passes AA and AA-large.
pub fn check_contrast(foreground: HexColor, background: HexColor) -> ContrastResult {
    let ratio = contrast_ratio(foreground, background);
    ContrastResult {
        ratio,
        level: WcagLevel::from_ratio(ratio),
        passes_aa: ratio >= AA_RATIO,
        passes_aaa: ratio >= AAA_RATIO,
        passes_aa_large: ratio >= AA_LARGE_RATIO,
    }
}
