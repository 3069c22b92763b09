//! Settings validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod contrast;
mod extraction;
mod helpers;


use crate::schema::ThemekitConfig;
use themekit_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ThemekitConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    extraction::validate_extraction(&mut errors, config);
    contrast::validate_contrast(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
