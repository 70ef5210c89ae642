//! Full configuration validation.
//!
//! Validates numeric ranges, color formats, and that the configured
//! minimum widths can coexist at all.

use crate::schema::SumeruConfig;
use sumeru_common::{Color, ConfigError};

/// Center region floor plus the largest window width a config must
/// reasonably fit. Minimums that blow past this are a config error,
/// not a runtime condition.
const MIN_CENTER_WIDTH: f64 = 100.0;
const MAX_COMBINED_MINIMUMS: f64 = 1280.0;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SumeruConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Layout constraints
    validate_range_f64(
        &mut errors,
        "layout.min_left_width",
        config.layout.min_left_width,
        50.0,
        1000.0,
    );
    validate_range_f64(
        &mut errors,
        "layout.min_right_width",
        config.layout.min_right_width,
        50.0,
        1000.0,
    );
    validate_range_f64(
        &mut errors,
        "layout.left_width",
        config.layout.left_width,
        0.0,
        10000.0,
    );
    validate_range_f64(
        &mut errors,
        "layout.right_width",
        config.layout.right_width,
        0.0,
        10000.0,
    );

    let combined =
        config.layout.min_left_width + config.layout.min_right_width + MIN_CENTER_WIDTH;
    if combined > MAX_COMBINED_MINIMUMS {
        errors.push(format!(
            "layout minimums cannot coexist: {combined} > {MAX_COMBINED_MINIMUMS}"
        ));
    }

    // Window constraints
    validate_range(&mut errors, "window.width", config.window.width, 400, 7680);
    validate_range(&mut errors, "window.height", config.window.height, 300, 4320);

    // Color formats
    validate_color(&mut errors, "colors.background", &config.colors.background);
    validate_color(&mut errors, "colors.left_panel_bg", &config.colors.left_panel_bg);
    validate_color(&mut errors, "colors.center_bg", &config.colors.center_bg);
    validate_color(&mut errors, "colors.right_panel_bg", &config.colors.right_panel_bg);
    validate_color(&mut errors, "colors.divider", &config.colors.divider);
    validate_color(&mut errors, "colors.divider_hover", &config.colors.divider_hover);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, field: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{field} must be in range {min}-{max}, got {value}"));
    }
}

fn validate_range_f64(errors: &mut Vec<String>, field: &str, value: f64, min: f64, max: f64) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{field} must be in range {min}-{max}, got {value}"));
    }
}

fn validate_color(errors: &mut Vec<String>, field: &str, value: &str) {
    if Color::from_hex(value).is_none() {
        errors.push(format!("{field} is not a valid hex color: {value:?}"));
    }
}

// =============================================================================
// Tests
// =============================================================================
