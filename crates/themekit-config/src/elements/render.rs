//! CSS rendering for element overrides.

use std::collections::BTreeMap;

use tracing::debug;

use super::definitions::element_by_id;
use super::ElementStyleOverride;

/// Render overrides as CSS rules separated by blank lines.
///
/// Overrides for unknown element ids are skipped, custom CSS included.
/// `::before`/`::after` rules apply the pseudo-element to every part of a
/// comma-separated selector, and their `content` values are quoted.
pub fn generate_element_css(overrides: &[ElementStyleOverride]) -> String {
    let mut rules: Vec<String> = Vec::new();

    for over in overrides {
        let Some(element) = element_by_id(&over.element_id) else {
            debug!(element_id = %over.element_id, "skipping override for unknown element");
            continue;
        };

        if let Some(body) = declarations(&over.styles, false) {
            rules.push(format!("{} {{\n{body}\n}}", element.selector));
        }

        for (styles, pseudo) in [
            (&over.before_styles, "::before"),
            (&over.after_styles, "::after"),
        ] {
            if let Some(body) = styles.as_ref().and_then(|s| declarations(s, true)) {
                rules.push(format!(
                    "{} {{\n{body}\n}}",
                    with_pseudo(element.selector, pseudo)
                ));
            }
        }

        if let Some(custom) = over.custom_css.as_deref().map(str::trim) {
            if !custom.is_empty() {
                rules.push(custom.to_string());
            }
        }
    }

    rules.join("\n\n")
}

/// `None` when every value is empty.
fn declarations(styles: &BTreeMap<String, String>, quote_content: bool) -> Option<String> {
    let lines: Vec<String> = styles
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(prop, value)| {
            if quote_content && prop == "content" {
                format!("  {prop}: \"{}\";", escape_css_string(value))
            } else {
                format!("  {prop}: {value};")
            }
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

fn with_pseudo(selector: &str, pseudo: &str) -> String {
    selector
        .split(',')
        .map(|part| format!("{}{pseudo}", part.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape_css_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
