use themekit_common::HexColor;
use tracing::debug;

use super::contrast_ratio;
use crate::convert::{hex_to_hsl, hsl_to_hex};

const SEARCH_STEPS: usize = 20;

/// Adjust the lightness of `foreground` until it reaches `target_ratio`
/// against `background`, keeping its hue and saturation.
///
/// Returns `foreground` untouched if it already passes. Otherwise the
/// lightness moves away from the background (lighter on backgrounds with
/// L < 50, darker otherwise) and a fixed-length bisection finds the passing
/// lightness closest to the original. When no lightness in that direction
/// passes, the extreme (white or black at L = 100 or 0) is returned as the
/// best attempt; the caller can re-check the result.
pub fn fix_contrast(foreground: HexColor, background: HexColor, target_ratio: f64) -> HexColor {
    if contrast_ratio(foreground, background) >= target_ratio {
        return foreground;
    }

    let fg = hex_to_hsl(foreground);
    let go_lighter = hex_to_hsl(background).l < 50.0;

    let (mut low, mut high) = if go_lighter { (fg.l, 100.0) } else { (0.0, fg.l) };
    let mut best: Option<HexColor> = None;

    for _ in 0..SEARCH_STEPS {
        let mid = (low + high) / 2.0;
        let candidate = hsl_to_hex(fg.h, fg.s, mid);

        if contrast_ratio(candidate, background) >= target_ratio {
            best = Some(candidate);
            // Passing: pull back toward the original lightness.
            if go_lighter {
                high = mid;
            } else {
                low = mid;
            }
        } else if go_lighter {
            low = mid;
        } else {
            high = mid;
        }
    }

    let fixed = best.unwrap_or_else(|| {
        let extreme = if go_lighter { 100.0 } else { 0.0 };
        hsl_to_hex(fg.h, fg.s, extreme)
    });

    debug!(
        %foreground,
        %background,
        %fixed,
        target_ratio,
        reached = best.is_some(),
        "contrast fix"
    );
    fixed
}
