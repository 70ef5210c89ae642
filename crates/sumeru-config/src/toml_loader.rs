//! TOML config file loading and creation.

use crate::schema::SumeruConfig;
use crate::validation;
use std::path::Path;
use sumeru_common::ConfigError;
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<SumeruConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: SumeruConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    // Validate and warn on errors, but still return a usable config
    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(SumeruConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/sumeru/config.toml`
/// On Linux: `~/.config/sumeru/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<SumeruConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(SumeruConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("sumeru").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = default_config_toml();

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Generate the default TOML config content with comments.
fn default_config_toml() -> String {
    r##"# Sumeru Configuration
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Sumeru"
# width = 1280           # 400-7680
# height = 800           # 300-4320

[layout]
# left_width = 320.0     # initial left panel width in px
# right_width = 320.0    # initial right panel width in px
# min_left_width = 200.0   # 50-1000
# min_right_width = 200.0  # 50-1000
# show_right_panel = true

[colors]
# background = "#0d1117"
# left_panel_bg = "#161b22"
# center_bg = "#0d1117"
# right_panel_bg = "#161b22"
# divider = "#30363d"
# divider_hover = "#58a6ff"

[logging]
# level = "info"         # tracing filter, e.g. "debug" or "sumeru=trace"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_nonexistent_returns_file_not_found() {
        let result = load_from_path(Path::new("/tmp/nonexistent_sumeru_config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_valid_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r##"
[layout]
left_width = 280.0

[colors]
background = "#000000"
"##,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert!((config.layout.left_width - 280.0).abs() < f64::EPSILON);
        assert_eq!(config.colors.background, "#000000");
        // Defaults preserved
        assert!((config.layout.right_width - 320.0).abs() < f64::EPSILON);
        assert_eq!(config.window.title, "Sumeru");
    }

    #[test]
    fn load_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let result = load_from_path(&path);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_config_with_invalid_values_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[layout]
min_left_width = 5.0
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        // Should fall back to default since validation fails
        assert!((config.layout.min_left_width - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn create_and_load_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sumeru").join("config.toml");

        create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.window.title, "Sumeru");
        assert_eq!(config.colors.background, "#0d1117");
    }

    #[test]
    fn default_config_toml_is_valid() {
        let content = default_config_toml();
        let config: SumeruConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.window.title, "Sumeru");
    }

    #[test]
    fn default_config_path_is_reasonable() {
        // This may not work in all CI environments, but should work locally
        if let Ok(path) = default_config_path() {
            let path_str = path.to_string_lossy();
            assert!(path_str.contains("sumeru"));
            assert!(path_str.ends_with("config.toml"));
        }
    }
}
