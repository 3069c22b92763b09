//! Hue-rotation harmonies and random palette synthesis.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use themekit_common::{ColorPalette, PaletteColors};

use crate::convert::hsl_to_hex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorHarmony {
    #[default]
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
    Monochromatic,
}

impl ColorHarmony {
    pub const ALL: [ColorHarmony; 5] = [
        ColorHarmony::Complementary,
        ColorHarmony::Analogous,
        ColorHarmony::Triadic,
        ColorHarmony::SplitComplementary,
        ColorHarmony::Monochromatic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorHarmony::Complementary => "complementary",
            ColorHarmony::Analogous => "analogous",
            ColorHarmony::Triadic => "triadic",
            ColorHarmony::SplitComplementary => "split-complementary",
            ColorHarmony::Monochromatic => "monochromatic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ColorHarmony::Complementary => "Opposite colors for high contrast",
            ColorHarmony::Analogous => "Adjacent colors for harmony",
            ColorHarmony::Triadic => "Three evenly spaced colors",
            ColorHarmony::SplitComplementary => "Base + two adjacent to complement",
            ColorHarmony::Monochromatic => "Single hue with varied lightness",
        }
    }

    /// Angular offsets from the base hue, in degrees.
    fn offsets(&self) -> &'static [f64] {
        match self {
            ColorHarmony::Complementary => &[0.0, 180.0],
            ColorHarmony::Analogous => &[0.0, 30.0, 330.0],
            ColorHarmony::Triadic => &[0.0, 120.0, 240.0],
            ColorHarmony::SplitComplementary => &[0.0, 150.0, 210.0],
            ColorHarmony::Monochromatic => &[0.0, 0.0, 0.0],
        }
    }
}

impl fmt::Display for ColorHarmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorHarmony {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorHarmony::ALL
            .into_iter()
            .find(|h| h.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown color harmony: {s}"))
    }
}

/// Related hues for `harmony`, each wrapped into [0, 360).
pub fn harmony_hues(base_hue: f64, harmony: ColorHarmony) -> Vec<f64> {
    harmony
        .offsets()
        .iter()
        .map(|offset| (base_hue + offset).rem_euclid(360.0))
        .collect()
}

/// Saturation/lightness pairs for each role. Text and borders take the
/// primary hue, so grays come out tinted.
struct Recipe {
    label: &'static str,
    primary: (f64, f64),
    secondary: (f64, f64),
    background: (f64, f64),
    surface: (f64, f64),
    text: (f64, f64),
    text_muted: (f64, f64),
    border: (f64, f64),
}

const DARK_RECIPE: Recipe = Recipe {
    label: "Dark",
    primary: (70.0, 60.0),
    secondary: (65.0, 55.0),
    background: (15.0, 12.0),
    surface: (12.0, 18.0),
    text: (10.0, 90.0),
    text_muted: (8.0, 60.0),
    border: (10.0, 25.0),
};

const LIGHT_RECIPE: Recipe = Recipe {
    label: "Light",
    primary: (70.0, 45.0),
    secondary: (65.0, 50.0),
    background: (20.0, 98.0),
    surface: (25.0, 94.0),
    text: (20.0, 15.0),
    text_muted: (15.0, 45.0),
    border: (15.0, 85.0),
};

/// Build a palette around `base_hue`, or a random hue when it is `None`.
///
/// With an explicit hue the result is fully deterministic. No contrast
/// check is applied; run the result through
/// [`suggested_fixes`](crate::contrast::suggested_fixes) if legibility
/// must be guaranteed.
pub fn generate_random_palette(
    harmony: ColorHarmony,
    dark: bool,
    base_hue: Option<f64>,
) -> ColorPalette {
    generate_random_palette_with_rng(harmony, dark, base_hue, &mut rand::thread_rng())
}

/// Build a palette from harmony hues, drawing the base hue from `rng` when
/// `base_hue` is `None`.
pub fn generate_random_palette_with_rng<R: Rng + ?Sized>(
    harmony: ColorHarmony,
    dark: bool,
    base_hue: Option<f64>,
    rng: &mut R,
) -> ColorPalette {
    let hue = base_hue.unwrap_or_else(|| f64::from(rng.gen_range(0u16..360)));
    let hues = harmony_hues(hue, harmony);

    let primary_hue = hues.first().copied().unwrap_or(hue);
    let secondary_hue = hues
        .get(1)
        .copied()
        .unwrap_or_else(|| (primary_hue + 60.0).rem_euclid(360.0));

    let recipe = if dark { &DARK_RECIPE } else { &LIGHT_RECIPE };
    let tone = |(s, l): (f64, f64)| hsl_to_hex(primary_hue, s, l);

    ColorPalette::new(
        format!("Random {harmony} {}", recipe.label),
        PaletteColors {
            primary: tone(recipe.primary),
            secondary: hsl_to_hex(secondary_hue, recipe.secondary.0, recipe.secondary.1),
            background: tone(recipe.background),
            surface: tone(recipe.surface),
            text: tone(recipe.text),
            text_muted: tone(recipe.text_muted),
            border: tone(recipe.border),
        },
    )
}
