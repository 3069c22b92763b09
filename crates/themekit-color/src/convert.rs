//! Conversions between hex, RGB and HSL.
//!
//! HSL values are clamped on the way out ([`hsl_to_hex`]) and never on the
//! way in, so intermediate math may leave the nominal ranges.

use themekit_common::{HexColor, Hsl, Rgb};

/// Channels as floats in [0, 255].
pub fn hex_to_rgb(hex: HexColor) -> Rgb {
    hex.to_rgb()
}

/// Round each channel to the nearest integer.
///
/// Clamping is the caller's job; out-of-range channels saturate at 0 or 255.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> HexColor {
    HexColor::from_rgb(to_channel(r), to_channel(g), to_channel(b))
}

/// Achromatic colors (r == g == b) report hue 0 and saturation 0.
pub fn hex_to_hsl(hex: HexColor) -> Hsl {
    let r = f64::from(hex.r) / 255.0;
    let g = f64::from(hex.g) / 255.0;
    let b = f64::from(hex.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(sector * 60.0, s * 100.0, l * 100.0)
}

/// Hue is wrapped into [0, 360); saturation and lightness are clamped to [0, 100].
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> HexColor {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    rgb_to_hex((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
}

/// Hue in [0, 360), used to seed harmony generation from a picked color.
pub fn hex_to_hue(hex: HexColor) -> f64 {
    hex_to_hsl(hex).h
}

fn to_channel(value: f64) -> u8 {
    // `as` saturates and maps NaN to 0.
    value.round() as u8
}
