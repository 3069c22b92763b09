//! Color science and palette synthesis for the theme editor.
//!
//! Everything here is a pure function of its inputs except image
//! extraction (random centroid seeding) and random palette generation,
//! both of which accept an injected [`rand::Rng`].
//!
//! ```rust
//! use themekit_color::{check_contrast, fix_contrast, WcagLevel};
//! use themekit_common::HexColor;
//!
//! let fg = HexColor::parse("#777777").unwrap();
//! let bg = HexColor::WHITE;
//! assert_eq!(check_contrast(fg, bg).level, WcagLevel::AaLarge);
//!
//! let fixed = fix_contrast(fg, bg, 4.5);
//! assert!(check_contrast(fixed, bg).passes_aa);
//! ```

pub mod contrast;
pub mod convert;
pub mod extract;
pub mod harmony;
pub mod roles;
pub mod url_parser;

pub use contrast::{
    check_contrast, check_palette_contrast, contrast_ratio, fix_contrast, luminance,
    relative_luminance, suggested_fixes, suggested_fixes_with_targets, ContrastResult,
    ContrastTargets, PaletteContrastReport, SuggestedFixes, WcagLevel,
};
pub use convert::{hex_to_hsl, hex_to_hue, hex_to_rgb, hsl_to_hex, rgb_to_hex};
pub use extract::{
    extract_colors_from_bytes, extract_colors_from_image, extract_colors_from_path,
    extract_colors_from_path_with_rng, extract_colors_from_pixels, generate_palette_from_colors,
    kmeans, palette_variants_from_image, ExtractOptions, ExtractedColorSet,
};
pub use harmony::{
    generate_random_palette, generate_random_palette_with_rng, harmony_hues, ColorHarmony,
};
pub use roles::{adjust_lightness, LuminanceRanking};
pub use url_parser::{
    generate_palette_from_url_colors, palette_variants_from_url, parse_color_palette_url,
    PaletteSource, ParsedPalette,
};
