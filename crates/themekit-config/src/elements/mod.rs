//! Per-element CSS overrides.
//!
//! Overrides target a fixed set of editor elements by id. Each element
//! maps to a CSS selector; [`generate_element_css`] renders the rules.

mod definitions;
mod render;


pub use definitions::{element_by_id, ElementCategory, ElementStyleDefinition, ELEMENTS};
pub use render::generate_element_css;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Style overrides for one element. Empty values are ignored on export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyleOverride {
    pub element_id: String,
    /// CSS property -> value.
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_styles: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_styles: Option<BTreeMap<String, String>>,
    /// Raw CSS appended after the generated rules.
    #[serde(
        default,
        rename = "customCSS",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_css: Option<String>,
}

impl ElementStyleOverride {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.styles.insert(property.to_string(), value.to_string());
        self
    }

    pub fn with_before(mut self, property: &str, value: &str) -> Self {
        self.before_styles
            .get_or_insert_with(BTreeMap::new)
            .insert(property.to_string(), value.to_string());
        self
    }

    pub fn with_after(mut self, property: &str, value: &str) -> Self {
        self.after_styles
            .get_or_insert_with(BTreeMap::new)
            .insert(property.to_string(), value.to_string());
        self
    }

    pub fn with_custom_css(mut self, css: &str) -> Self {
        self.custom_css = Some(css.to_string());
        self
    }
}
