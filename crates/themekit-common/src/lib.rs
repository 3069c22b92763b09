pub mod errors;
pub mod types;

pub use errors::{ColorError, ConfigError, ExtractError, ThemekitError};
pub use types::{ColorPalette, HexColor, Hsl, PaletteColors, PaletteRole, Rgb, ThemeMode};

pub type Result<T> = std::result::Result<T, ThemekitError>;
