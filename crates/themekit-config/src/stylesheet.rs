//! CSS export: palette custom properties plus element overrides.

use std::fmt::Write;

use themekit_common::{PaletteColors, ThemeMode};

use crate::elements::generate_element_css;
use crate::theme::ThemeVariants;

/// Render the theme as CSS variables, followed by any element overrides.
///
/// Light and dark mode emit a single `:root` block for that palette.
/// System mode emits both palettes inside `prefers-color-scheme` queries.
pub fn generate_css(theme: &ThemeVariants) -> String {
    let palette_css = palette_css(theme);
    let element_css = generate_element_css(&theme.element_overrides);
    if element_css.is_empty() {
        palette_css
    } else {
        format!("{palette_css}\n\n/* Element Overrides */\n{element_css}")
    }
}

fn palette_css(theme: &ThemeVariants) -> String {
    match theme.active_mode {
        ThemeMode::Light => {
            format!("/* Light Mode */\n:root {{\n{}}}", variables(&theme.light.colors, "  "))
        }
        ThemeMode::Dark => {
            format!("/* Dark Mode */\n:root {{\n{}}}", variables(&theme.dark.colors, "  "))
        }
        ThemeMode::System => format!(
            "/* Roam Theme - Auto Light/Dark */\n\n{}\n\n{}",
            media_block("Light Mode", "light", &theme.light.colors),
            media_block("Dark Mode", "dark", &theme.dark.colors),
        ),
    }
}

fn media_block(label: &str, scheme: &str, colors: &PaletteColors) -> String {
    format!(
        "/* {label} */\n@media (prefers-color-scheme: {scheme}) {{\n  :root {{\n{}  }}\n}}",
        variables(colors, "    ")
    )
}

fn variables(colors: &PaletteColors, indent: &str) -> String {
    let vars = [
        ("--page-link-color", colors.primary.to_hex()),
        ("--tag-bg-color", format!("{}20", colors.secondary)),
        ("--tag-font-color", colors.secondary.to_hex()),
        ("--body-bg", colors.background.to_hex()),
        ("--sidebar-bg", colors.surface.to_hex()),
        ("--main-font-color", colors.text.to_hex()),
        ("--page-bracket-color", colors.text_muted.to_hex()),
        ("--highlight-background-color", format!("{}30", colors.primary)),
    ];

    let mut out = String::new();
    for (name, value) in vars {
        let _ = writeln!(out, "{indent}{name}: {value};");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ElementStyleOverride;
    use crate::presets::preset_by_id;

    fn default_theme(mode: ThemeMode) -> ThemeVariants {
        ThemeVariants::from_preset(&preset_by_id("default").unwrap(), mode)
    }

    #[test]
    fn light_mode_renders_single_root_block() {
        let css = generate_css(&default_theme(ThemeMode::Light));
        let expected = "/* Light Mode */
:root {
  --page-link-color: #137cbd;
  --tag-bg-color: #d9822b20;
  --tag-font-color: #d9822b;
  --body-bg: #ffffff;
  --sidebar-bg: #f5f8fa;
  --main-font-color: #182026;
  --page-bracket-color: #5c7080;
  --highlight-background-color: #137cbd30;
}";
        assert_eq!(css, expected);
    }

    #[test]
    fn dark_mode_uses_dark_palette() {
        let css = generate_css(&default_theme(ThemeMode::Dark));
        assert!(css.starts_with("/* Dark Mode */\n:root {\n"));
        assert!(css.contains("  --body-bg: #1c2127;\n"));
        assert!(css.contains("  --highlight-background-color: #48aff030;\n"));
        assert!(!css.contains("@media"));
    }

    #[test]
    fn element_overrides_follow_palette_block() {
        let mut theme = default_theme(ThemeMode::Light);
        theme.set_element_override(
            ElementStyleOverride::new("page-link").with_style("font-weight", "600"),
        );
        let css = generate_css(&theme);
        assert!(css.starts_with("/* Light Mode */\n:root {\n"));
        assert!(css.ends_with(
            "}\n\n/* Element Overrides */\n.rm-page-ref--link {\n  font-weight: 600;\n}"
        ));
    }

    #[test]
    fn overrides_that_render_nothing_add_no_section() {
        let mut theme = default_theme(ThemeMode::Dark);
        theme.set_element_override(ElementStyleOverride::new("unknown-element"));
        assert!(!generate_css(&theme).contains("Element Overrides"));
    }

    #[test]
    fn system_mode_emits_both_media_queries() {
        let css = generate_css(&default_theme(ThemeMode::System));
        assert!(css.starts_with("/* Roam Theme - Auto Light/Dark */\n\n/* Light Mode */\n"));
        assert!(css.contains("@media (prefers-color-scheme: light) {\n  :root {\n    --page-link-color: #137cbd;\n"));
        assert!(css.contains("\n/* Dark Mode */\n@media (prefers-color-scheme: dark) {\n"));
        assert!(css.contains("    --highlight-background-color: #48aff030;\n  }\n}"));
        assert!(css.ends_with("  }\n}"));
        assert_eq!(css.matches(":root").count(), 2);
    }
}
