use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("image decode error: {0}")]
    Decode(String),

    #[error("image read error: {0}")]
    Io(String),

    #[error("no usable pixels in image")]
    NoUsablePixels,

    #[error("invalid extraction options: {0}")]
    InvalidOptions(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config write error: {0}")]
    WriteError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ThemekitError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_display() {
        let err = ColorError::InvalidHex("#12".into());
        assert_eq!(err.to_string(), "invalid hex color: \"#12\"");
    }

    #[test]
    fn extract_error_display() {
        assert_eq!(
            ExtractError::NoUsablePixels.to_string(),
            "no usable pixels in image"
        );

        let err = ExtractError::Decode("unsupported format".into());
        assert_eq!(err.to_string(), "image decode error: unsupported format");

        let err = ExtractError::InvalidOptions("num_colors = 0".into());
        assert_eq!(
            err.to_string(),
            "invalid extraction options: num_colors = 0"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("extraction.iterations = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: extraction.iterations = 0"
        );

        let err = ConfigError::WriteError("disk full".into());
        assert_eq!(err.to_string(), "config write error: disk full");
    }

    #[test]
    fn themekit_error_from_variants() {
        let err: ThemekitError = ColorError::InvalidHex("zz".into()).into();
        assert!(matches!(err, ThemekitError::Color(_)));
        assert!(err.to_string().contains("zz"));

        let err: ThemekitError = ExtractError::NoUsablePixels.into();
        assert!(matches!(err, ThemekitError::Extract(_)));

        let err: ThemekitError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, ThemekitError::Config(_)));
        assert!(err.to_string().contains("bad toml"));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ThemekitError = io_err.into();
        assert!(matches!(err, ThemekitError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
