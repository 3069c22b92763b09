//! `[extraction]` section bounds.

use super::helpers::{validate_range, validate_range_f64};
use crate::schema::ThemekitConfig;

pub(super) fn validate_extraction(errors: &mut Vec<String>, config: &ThemekitConfig) {
    let e = &config.extraction;
    validate_range(errors, "extraction.num_colors", e.num_colors, 1, 32);
    validate_range(
        errors,
        "extraction.max_dimension",
        e.max_dimension as usize,
        1,
        4096,
    );
    validate_range(errors, "extraction.sample_stride", e.sample_stride, 1, 64);
    validate_range(errors, "extraction.iterations", e.iterations, 1, 100);
    validate_range(
        errors,
        "extraction.cluster_multiplier",
        e.cluster_multiplier,
        1,
        8,
    );
    validate_range_f64(errors, "extraction.min_luminance", e.min_luminance, 0.0, 1.0);
    validate_range_f64(errors, "extraction.max_luminance", e.max_luminance, 0.0, 1.0);

    if e.min_luminance >= e.max_luminance {
        errors.push(format!(
            "extraction.min_luminance ({}) must be less than extraction.max_luminance ({})",
            e.min_luminance, e.max_luminance
        ));
    }
}
