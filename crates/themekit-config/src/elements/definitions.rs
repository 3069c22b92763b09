//! Built-in editable element definitions.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Text,
    Layout,
    Colors,
    Interactive,
}

/// An element that overrides can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementStyleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    /// May be a comma-separated selector list.
    pub selector: &'static str,
    pub description: &'static str,
    pub category: ElementCategory,
}

const fn def(
    id: &'static str,
    name: &'static str,
    selector: &'static str,
    description: &'static str,
    category: ElementCategory,
) -> ElementStyleDefinition {
    ElementStyleDefinition {
        id,
        name,
        selector,
        description,
        category,
    }
}

pub const ELEMENTS: &[ElementStyleDefinition] = &[
    def(
        "page-title",
        "Page Title",
        ".rm-title-display",
        "The main page title (e.g., daily note date)",
        ElementCategory::Text,
    ),
    def(
        "heading-1",
        "Heading 1",
        ".rm-heading.rm-level1, .roam-body .roam-app h1:not(.rm-title-display)",
        "Level 1 headings in blocks",
        ElementCategory::Text,
    ),
    def(
        "heading-2",
        "Heading 2",
        ".rm-heading.rm-level2",
        "Level 2 headings in blocks",
        ElementCategory::Text,
    ),
    def(
        "heading-3",
        "Heading 3",
        ".rm-heading.rm-level3",
        "Level 3 headings in blocks",
        ElementCategory::Text,
    ),
    def(
        "page-link",
        "Page Link",
        ".rm-page-ref--link",
        "Internal page references [[like this]]",
        ElementCategory::Interactive,
    ),
    def(
        "tag",
        "Tag",
        ".rm-page-ref--tag",
        "Tags #like-this",
        ElementCategory::Interactive,
    ),
    def(
        "code-block",
        "Code Block",
        ".rm-code-block",
        "Multi-line code blocks",
        ElementCategory::Colors,
    ),
    def(
        "inline-code",
        "Inline Code",
        "code",
        "Inline code snippets",
        ElementCategory::Colors,
    ),
    def(
        "bullet",
        "Bullet",
        ".rm-bullet",
        "Block bullet points",
        ElementCategory::Layout,
    ),
    def(
        "block-ref",
        "Block Reference",
        ".rm-block-ref",
        "Block references ((uid))",
        ElementCategory::Interactive,
    ),
    def(
        "sidebar",
        "Sidebar",
        ".roam-sidebar",
        "Left sidebar panel",
        ElementCategory::Layout,
    ),
    def(
        "highlight",
        "Highlight",
        "mark, .rm-highlight",
        "Highlighted text",
        ElementCategory::Colors,
    ),
];

pub fn element_by_id(id: &str) -> Option<&'static ElementStyleDefinition> {
    ELEMENTS.iter().find(|el| el.id == id)
}
