use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The configured minimum widths cannot coexist in any sane container.
    #[error("impossible minimum widths: {required}px required, {budget}px available")]
    ImpossibleMinimums { required: f64, budget: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum SumeruError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("missing field 'layout'".into());
        assert_eq!(
            err.to_string(),
            "config validation error: missing field 'layout'"
        );
    }

    #[test]
    fn layout_error_display() {
        let err = LayoutError::ImpossibleMinimums {
            required: 1500.0,
            budget: 1280.0,
        };
        assert_eq!(
            err.to_string(),
            "impossible minimum widths: 1500px required, 1280px available"
        );
    }

    #[test]
    fn sumeru_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: SumeruError = config_err.into();
        assert!(matches!(err, SumeruError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn sumeru_error_from_layout() {
        let layout_err = LayoutError::ImpossibleMinimums {
            required: 600.0,
            budget: 500.0,
        };
        let err: SumeruError = layout_err.into();
        assert!(matches!(err, SumeruError::Layout(_)));
    }

    #[test]
    fn sumeru_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SumeruError = io_err.into();
        assert!(matches!(err, SumeruError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn sumeru_error_other_variants() {
        let err = SumeruError::Renderer("gpu not found".into());
        assert_eq!(err.to_string(), "renderer error: gpu not found");

        let err = SumeruError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
