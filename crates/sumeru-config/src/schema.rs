//! Configuration schema types for Sumeru.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with sensible defaults.

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Config
// =============================================================================

/// Workspace chrome color palette. All values are hex colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: String,
    pub left_panel_bg: String,
    pub center_bg: String,
    pub right_panel_bg: String,
    pub divider: String,
    pub divider_hover: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#0d1117".into(),
            left_panel_bg: "#161b22".into(),
            center_bg: "#0d1117".into(),
            right_panel_bg: "#161b22".into(),
            divider: "#30363d".into(),
            divider_hover: "#58a6ff".into(),
        }
    }
}

// =============================================================================
// Layout Config
// =============================================================================

/// Panel layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Initial left panel width in pixels.
    pub left_width: f64,
    /// Initial right panel width in pixels.
    pub right_width: f64,
    /// Minimum left panel width in pixels (valid range: 50-1000).
    pub min_left_width: f64,
    /// Minimum right panel width in pixels (valid range: 50-1000).
    pub min_right_width: f64,
    /// Whether the right panel is shown at startup.
    pub show_right_panel: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left_width: 320.0,
            right_width: 320.0,
            min_left_width: 200.0,
            min_right_width: 200.0,
            show_right_panel: true,
        }
    }
}

// =============================================================================
// Window Config
// =============================================================================

/// Window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial window width in pixels (valid range: 400-7680).
    pub width: u32,
    /// Initial window height in pixels (valid range: 300-4320).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sumeru".into(),
            width: 1280,
            height: 800,
        }
    }
}

// =============================================================================
// Logging Config
// =============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Tracing filter directive, e.g. "info" or "sumeru=debug".
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

// =============================================================================
// Root Config
// =============================================================================

/// Root configuration for Sumeru.
///
/// All options have sensible defaults. Only override what you want to
/// change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SumeruConfig {
    pub colors: ColorConfig,
    pub layout: LayoutConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
