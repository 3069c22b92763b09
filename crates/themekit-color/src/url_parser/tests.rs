//! Tests for palette URL and free-form text parsing.

use super::*;

fn hexes(list: &[&str]) -> Vec<HexColor> {
    list.iter().map(|s| HexColor::parse(s).unwrap()).collect()
}

#[test]
fn parses_coolors_url() {
    let parsed =
        parse_color_palette_url("https://coolors.co/264653-2a9d8f-e9c46a-f4a261-e76f51").unwrap();
    assert_eq!(parsed.source, PaletteSource::Coolors);
    assert_eq!(
        parsed.colors,
        hexes(&["#264653", "#2a9d8f", "#e9c46a", "#f4a261", "#e76f51"])
    );
}

#[test]
fn parses_coolors_palette_path() {
    let parsed =
        parse_color_palette_url("  https://coolors.co/palette/264653-2a9d8f-e9c46a  ").unwrap();
    assert_eq!(parsed.source, PaletteSource::Coolors);
    assert_eq!(parsed.colors, hexes(&["#264653", "#2a9d8f", "#e9c46a"]));
}

#[test]
fn coolors_is_case_insensitive_and_normalized() {
    let parsed = parse_color_palette_url("COOLORS.CO/264653-2A9D8F").unwrap();
    assert_eq!(parsed.source, PaletteSource::Coolors);
    assert_eq!(parsed.colors[1].to_hex(), "#2a9d8f");
}

#[test]
fn parses_colorhunt_url() {
    let parsed =
        parse_color_palette_url("https://colorhunt.co/palette/222831393e4600adb5eeeeee").unwrap();
    assert_eq!(parsed.source, PaletteSource::ColorHunt);
    assert_eq!(
        parsed.colors,
        hexes(&["#222831", "#393e46", "#00adb5", "#eeeeee"])
    );
}

#[test]
fn colorhunt_drops_partial_trailing_chunk() {
    let parsed = parse_color_palette_url("https://colorhunt.co/palette/222831393e46abc").unwrap();
    assert_eq!(parsed.colors, hexes(&["#222831", "#393e46"]));
}

#[test]
fn colorhunt_too_short_falls_through() {
    // Fewer than six digits: not a ColorHunt palette, and no hex token either.
    assert_eq!(parse_color_palette_url("https://colorhunt.co/palette/abc"), None);
}

#[test]
fn parses_freeform_hex_tokens() {
    let parsed = parse_color_palette_url("use #264653 and 2a9d8f please").unwrap();
    assert_eq!(parsed.source, PaletteSource::Unknown);
    assert_eq!(parsed.colors, hexes(&["#264653", "#2a9d8f"]));
}

#[test]
fn freeform_accepts_comma_separated_list() {
    let parsed = parse_color_palette_url("#FF0000, #00ff00,0000ff").unwrap();
    assert_eq!(parsed.colors, hexes(&["#ff0000", "#00ff00", "#0000ff"]));
}

#[test]
fn unrecognized_text_is_none() {
    assert_eq!(parse_color_palette_url("hello world"), None);
    assert_eq!(parse_color_palette_url(""), None);
    assert_eq!(parse_color_palette_url("#12345"), None);
}

#[test]
fn source_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&PaletteSource::ColorHunt).unwrap(),
        "\"colorhunt\""
    );
    assert_eq!(PaletteSource::Coolors.to_string(), "coolors");
}

#[test]
fn url_palette_uses_fixed_neutrals() {
    let colors = hexes(&["#264653", "#2a9d8f", "#e9c46a", "#f4a261", "#e76f51"]);

    let dark = generate_palette_from_url_colors(&colors, true);
    assert_eq!(dark.background.to_hex(), "#0f0f0f");
    assert_eq!(dark.surface.to_hex(), "#1a1a1a");
    assert_eq!(dark.border.to_hex(), "#2a2a2a");

    let light = generate_palette_from_url_colors(&colors, false);
    assert_eq!(light.background, HexColor::WHITE);
    assert_eq!(light.text.to_hex(), "#111827");
}

#[test]
fn url_palette_picks_accents_by_position() {
    // Channel-weighted order: e9c46a, f4a261, e76f51, 2a9d8f, 264653
    let colors = hexes(&["#264653", "#2a9d8f", "#e9c46a", "#f4a261", "#e76f51"]);

    let dark = generate_palette_from_url_colors(&colors, true);
    assert_eq!(dark.primary.to_hex(), "#f4a261"); // floor(5 * 0.3) = 1
    assert_eq!(dark.secondary.to_hex(), "#e76f51"); // floor(5 * 0.5) = 2

    let light = generate_palette_from_url_colors(&colors, false);
    assert_eq!(light.primary.to_hex(), "#2a9d8f"); // floor(5 * 0.6) = 3
    assert_eq!(light.secondary.to_hex(), "#e76f51"); // floor(5 * 0.4) = 2
}

#[test]
fn variants_are_named_after_source() {
    let parsed = parse_color_palette_url("https://coolors.co/264653-2a9d8f").unwrap();
    let (light, dark) = palette_variants_from_url(&parsed);
    assert_eq!(light.name, "From coolors (Light)");
    assert_eq!(dark.name, "From coolors (Dark)");
}
