//! Portable theme files.
//!
//! A theme file holds a light and a dark palette plus the active mode.
//! Files are JSON unless the extension is `.yaml` or `.yml`.

mod loader;
mod types;
mod writer;

pub use loader::load_theme_file;
pub use types::{ThemeFormat, ThemeVariants};
pub use writer::save_theme_file;
