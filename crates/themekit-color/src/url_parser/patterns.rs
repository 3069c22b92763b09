//! Compiled patterns for palette-sharing URLs and bare hex codes.

use regex::Regex;
use std::sync::LazyLock;

/// `coolors.co/264653-2a9d8f-...`, optionally under `palette/`.
pub(crate) static COOLORS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)coolors\.co/(?:palette/)?([a-f0-9]{6}(?:-[a-f0-9]{6})*)").unwrap()
});

/// `colorhunt.co/palette/222831393e46...`, six hex digits per color, no separator.
pub(crate) static COLORHUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)colorhunt\.co/palette/([a-f0-9]+)").unwrap());

/// Any six hex digits, with or without a leading `#`.
pub(crate) static HEX_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#?[a-f0-9]{6}").unwrap());
