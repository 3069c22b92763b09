//! `[contrast]` section bounds.

use super::helpers::validate_range_f64;
use crate::schema::ThemekitConfig;

pub(super) fn validate_contrast(errors: &mut Vec<String>, config: &ThemekitConfig) {
    validate_range_f64(errors, "contrast.text", config.contrast.text, 1.0, 21.0);
    validate_range_f64(errors, "contrast.accent", config.contrast.accent, 1.0, 21.0);
}
