//! Mapping an arbitrary-length color list onto the seven palette roles.
//!
//! Both the image and URL paths rank their input by brightness and then
//! read roles at fixed fractional positions (`floor(len * f)`). Every role
//! has a documented fallback, used only when the list is empty.

use themekit_common::{HexColor, PaletteColors};

use crate::contrast::relative_luminance;
use crate::convert::rgb_to_hex;

/// Colors sorted from brightest to darkest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LuminanceRanking {
    colors: Vec<HexColor>,
}

impl LuminanceRanking {
    /// Rank by WCAG relative luminance (gamma-corrected).
    pub fn by_relative_luminance(colors: &[HexColor]) -> Self {
        Self::rank(colors, relative_luminance)
    }

    /// Rank by the weighted sum of raw channel values, without linearization.
    pub fn by_channel_weight(colors: &[HexColor]) -> Self {
        Self::rank(colors, |c| {
            0.2126 * f64::from(c.r) + 0.7152 * f64::from(c.g) + 0.0722 * f64::from(c.b)
        })
    }

    fn rank(colors: &[HexColor], key: impl Fn(HexColor) -> f64) -> Self {
        let mut keyed: Vec<(HexColor, f64)> = colors.iter().map(|&c| (c, key(c))).collect();
        keyed.sort_by(|a, b| b.1.total_cmp(&a.1));
        Self {
            colors: keyed.into_iter().map(|(c, _)| c).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn as_slice(&self) -> &[HexColor] {
        &self.colors
    }

    pub fn lightest(&self) -> Option<HexColor> {
        self.colors.first().copied()
    }

    pub fn darkest(&self) -> Option<HexColor> {
        self.colors.last().copied()
    }

    /// The color at index `floor(len * fraction)`, if that index exists.
    pub fn at_fraction(&self, fraction: f64) -> Option<HexColor> {
        let index = (self.colors.len() as f64 * fraction).floor();
        if index < 0.0 {
            return None;
        }
        self.colors.get(index as usize).copied()
    }
}

/// Scale each channel by `1 + amount / 100`, clamped to [0, 255].
pub fn adjust_lightness(color: HexColor, amount: f64) -> HexColor {
    let factor = 1.0 + amount / 100.0;
    let rgb = color.to_rgb();
    rgb_to_hex(
        (rgb.r * factor).clamp(0.0, 255.0),
        (rgb.g * factor).clamp(0.0, 255.0),
        (rgb.b * factor).clamp(0.0, 255.0),
    )
}

const fn rgb(r: u8, g: u8, b: u8) -> HexColor {
    HexColor::from_rgb(r, g, b)
}

/// Roles for colors extracted from an image.
///
/// Dark mode:
/// - background: darkest, darkened 30% (fallback `#1a1a2e`)
/// - surface: position 0.7, darkened 20% (fallback `#16213e`)
/// - border: position 0.7, lightened 10%
/// - primary: position 0.3 (fallback `#e94560`)
/// - secondary: position 0.4 (fallback `#0f3460`)
/// - text `#f0f0f0`, muted `#a0a0a0`
///
/// Light mode:
/// - background: lightest, lightened 20% (fallback `#ffffff`)
/// - surface: position 0.2, lightened 10% (fallback `#f5f5f5`)
/// - border: position 0.2, darkened 15%
/// - primary: position 0.5 (fallback `#3498db`)
/// - secondary: position 0.6 (fallback `#e74c3c`)
/// - text `#1a1a1a`, muted `#6b7280`
pub fn assign_image_roles(ranking: &LuminanceRanking, dark: bool) -> PaletteColors {
    if dark {
        let darkest = ranking.darkest().unwrap_or(rgb(0x1a, 0x1a, 0x2e));
        let mid_dark = ranking.at_fraction(0.7).unwrap_or(rgb(0x16, 0x21, 0x3e));
        PaletteColors {
            primary: ranking.at_fraction(0.3).unwrap_or(rgb(0xe9, 0x45, 0x60)),
            secondary: ranking.at_fraction(0.4).unwrap_or(rgb(0x0f, 0x34, 0x60)),
            background: adjust_lightness(darkest, -30.0),
            surface: adjust_lightness(mid_dark, -20.0),
            text: rgb(0xf0, 0xf0, 0xf0),
            text_muted: rgb(0xa0, 0xa0, 0xa0),
            border: adjust_lightness(mid_dark, 10.0),
        }
    } else {
        let lightest = ranking.lightest().unwrap_or(HexColor::WHITE);
        let mid_light = ranking.at_fraction(0.2).unwrap_or(rgb(0xf5, 0xf5, 0xf5));
        PaletteColors {
            primary: ranking.at_fraction(0.5).unwrap_or(rgb(0x34, 0x98, 0xdb)),
            secondary: ranking.at_fraction(0.6).unwrap_or(rgb(0xe7, 0x4c, 0x3c)),
            background: adjust_lightness(lightest, 20.0),
            surface: adjust_lightness(mid_light, 10.0),
            text: rgb(0x1a, 0x1a, 0x1a),
            text_muted: rgb(0x6b, 0x72, 0x80),
            border: adjust_lightness(mid_light, -15.0),
        }
    }
}

/// Roles for colors parsed from a palette URL or text.
///
/// Only the accents come from the input; the neutral roles are fixed.
/// Dark mode reads primary at 0.3 (fallback `#60a5fa`) and secondary at
/// 0.5 (fallback `#a78bfa`); light mode reads primary at 0.6 (fallback
/// `#3b82f6`) and secondary at 0.4 (fallback `#8b5cf6`).
pub fn assign_url_roles(ranking: &LuminanceRanking, dark: bool) -> PaletteColors {
    if dark {
        PaletteColors {
            primary: ranking.at_fraction(0.3).unwrap_or(rgb(0x60, 0xa5, 0xfa)),
            secondary: ranking.at_fraction(0.5).unwrap_or(rgb(0xa7, 0x8b, 0xfa)),
            background: rgb(0x0f, 0x0f, 0x0f),
            surface: rgb(0x1a, 0x1a, 0x1a),
            text: rgb(0xf0, 0xf0, 0xf0),
            text_muted: rgb(0x9c, 0xa3, 0xaf),
            border: rgb(0x2a, 0x2a, 0x2a),
        }
    } else {
        PaletteColors {
            primary: ranking.at_fraction(0.6).unwrap_or(rgb(0x3b, 0x82, 0xf6)),
            secondary: ranking.at_fraction(0.4).unwrap_or(rgb(0x8b, 0x5c, 0xf6)),
            background: HexColor::WHITE,
            surface: rgb(0xf9, 0xfa, 0xfb),
            text: rgb(0x11, 0x18, 0x27),
            text_muted: rgb(0x6b, 0x72, 0x80),
            border: rgb(0xe5, 0xe7, 0xeb),
        }
    }
}
