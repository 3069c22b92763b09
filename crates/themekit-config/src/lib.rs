//! Themekit settings, presets, theme files and stylesheet export.
//!
//! Settings live in a TOML file; every section has defaults so partial
//! files work. Theme files (a light/dark palette pair plus optional
//! per-element overrides) are JSON or YAML.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use themekit_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod atomic;
pub mod elements;
pub mod presets;
pub mod schema;
pub mod stylesheet;
pub mod theme;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use elements::{generate_element_css, ElementStyleOverride};
pub use presets::{palette_presets, preset_by_id, PalettePreset, BUILT_IN_PRESETS};
pub use schema::{GeneratorConfig, StylesheetConfig, ThemekitConfig};
pub use stylesheet::generate_css;
pub use theme::{load_theme_file, save_theme_file, ThemeFormat, ThemeVariants};
pub use toml_writer::{save_config, save_config_to_path};

use themekit_common::ConfigError;

/// Load settings from the platform default path and validate them.
pub fn load_config() -> Result<ThemekitConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize settings to a pretty-printed JSON string.
pub fn config_to_json(config: &ThemekitConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
