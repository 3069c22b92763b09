//! Palette extraction from shared URLs and free-form text.
//!
//! Formats are tried in a fixed order: Coolors, ColorHunt, then any
//! six-digit hex tokens in the text. No match is `None`, not an error.

mod patterns;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};
use themekit_common::{ColorPalette, HexColor, PaletteColors};

use crate::roles::{assign_url_roles, LuminanceRanking};
use patterns::{COLORHUNT_RE, COOLORS_RE, HEX_TOKEN_RE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteSource {
    Coolors,
    ColorHunt,
    Unknown,
}

impl fmt::Display for PaletteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaletteSource::Coolors => "coolors",
            PaletteSource::ColorHunt => "colorhunt",
            PaletteSource::Unknown => "unknown",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPalette {
    pub colors: Vec<HexColor>,
    pub source: PaletteSource,
}

/// Extract colors from a palette URL or free text. `None` when nothing matches.
pub fn parse_color_palette_url(input: &str) -> Option<ParsedPalette> {
    let trimmed = input.trim();

    if let Some(colors) = parse_coolors(trimmed) {
        return Some(ParsedPalette {
            colors,
            source: PaletteSource::Coolors,
        });
    }

    if let Some(colors) = parse_colorhunt(trimmed) {
        return Some(ParsedPalette {
            colors,
            source: PaletteSource::ColorHunt,
        });
    }

    parse_hex_tokens(trimmed).map(|colors| ParsedPalette {
        colors,
        source: PaletteSource::Unknown,
    })
}

fn parse_coolors(input: &str) -> Option<Vec<HexColor>> {
    let caps = COOLORS_RE.captures(input)?;
    let colors: Vec<HexColor> = caps[1]
        .split('-')
        .filter_map(|chunk| HexColor::parse(chunk).ok())
        .collect();
    non_empty(colors)
}

fn parse_colorhunt(input: &str) -> Option<Vec<HexColor>> {
    let caps = COLORHUNT_RE.captures(input)?;
    // Trailing digits that do not fill a whole color are dropped.
    let colors: Vec<HexColor> = caps[1]
        .as_bytes()
        .chunks_exact(6)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .filter_map(|chunk| HexColor::parse(chunk).ok())
        .collect();
    non_empty(colors)
}

fn parse_hex_tokens(input: &str) -> Option<Vec<HexColor>> {
    let colors: Vec<HexColor> = HEX_TOKEN_RE
        .find_iter(input)
        .filter_map(|m| HexColor::parse(m.as_str()).ok())
        .collect();
    non_empty(colors)
}

fn non_empty(colors: Vec<HexColor>) -> Option<Vec<HexColor>> {
    if colors.is_empty() {
        None
    } else {
        Some(colors)
    }
}

/// Map parsed colors onto the seven roles.
///
/// Only the accents come from the input; see [`assign_url_roles`].
pub fn generate_palette_from_url_colors(colors: &[HexColor], dark: bool) -> PaletteColors {
    let ranking = LuminanceRanking::by_channel_weight(colors);
    assign_url_roles(&ranking, dark)
}

/// Light and dark palettes named after the palette's source.
pub fn palette_variants_from_url(parsed: &ParsedPalette) -> (ColorPalette, ColorPalette) {
    (
        ColorPalette::new(
            format!("From {} (Light)", parsed.source),
            generate_palette_from_url_colors(&parsed.colors, false),
        ),
        ColorPalette::new(
            format!("From {} (Dark)", parsed.source),
            generate_palette_from_url_colors(&parsed.colors, true),
        ),
    )
}
