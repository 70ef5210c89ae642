//! Workspace chrome quads.
//!
//! Builds the instanced quad list for one frame: region backgrounds
//! first, divider strips on top. The divider under the pointer (or
//! being dragged) renders in the hover color.

use sumeru_common::Color;
use sumeru_config::schema::ColorConfig;
use sumeru_layout::dividers::Divider;
use sumeru_layout::engine::DragEdge;
use sumeru_layout::frames::RegionFrames;

use crate::quad::QuadInstance;

/// Rendered width of a divider strip in pixels. The drag hit zone is
/// wider; this is only the visible line.
const DIVIDER_STRIP_WIDTH: f64 = 2.0;

// ---------------------------------------------------------------------------
// ChromeColors
// ---------------------------------------------------------------------------

/// Chrome palette resolved to linear-space RGBA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeColors {
    pub background: [f32; 4],
    pub left_panel_bg: [f32; 4],
    pub center_bg: [f32; 4],
    pub right_panel_bg: [f32; 4],
    pub divider: [f32; 4],
    pub divider_hover: [f32; 4],
}

impl ChromeColors {
    /// Resolve the config palette. Colors that fail to parse fall back
    /// to the corresponding default.
    pub fn from_config(config: &ColorConfig) -> Self {
        let defaults = ColorConfig::default();
        let resolve = |value: &str, fallback: &str| {
            let color = Color::from_hex(value)
                .or_else(|| Color::from_hex(fallback))
                .unwrap_or(Color::from_rgba(0, 0, 0, 255));
            color_to_linear(color)
        };

        Self {
            background: resolve(&config.background, &defaults.background),
            left_panel_bg: resolve(&config.left_panel_bg, &defaults.left_panel_bg),
            center_bg: resolve(&config.center_bg, &defaults.center_bg),
            right_panel_bg: resolve(&config.right_panel_bg, &defaults.right_panel_bg),
            divider: resolve(&config.divider, &defaults.divider),
            divider_hover: resolve(&config.divider_hover, &defaults.divider_hover),
        }
    }
}

/// Convert an sRGB color to linear-space RGBA floats for the shader.
pub fn color_to_linear(color: Color) -> [f32; 4] {
    [
        srgb_to_linear(color.r as f64 / 255.0) as f32,
        srgb_to_linear(color.g as f64 / 255.0) as f32,
        srgb_to_linear(color.b as f64 / 255.0) as f32,
        color.a as f32 / 255.0,
    ]
}

/// sRGB electro-optical transfer function.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ---------------------------------------------------------------------------
// Quad assembly
// ---------------------------------------------------------------------------

/// Build the chrome quad list for one frame.
pub fn build_chrome_quads(
    frames: &RegionFrames,
    dividers: &[Divider],
    highlighted: Option<DragEdge>,
    colors: &ChromeColors,
) -> Vec<QuadInstance> {
    let mut quads = Vec::with_capacity(dividers.len() + 3);

    quads.push(rect_quad(
        frames.left.x,
        frames.left.y,
        frames.left.width,
        frames.left.height,
        colors.left_panel_bg,
    ));
    quads.push(rect_quad(
        frames.center.x,
        frames.center.y,
        frames.center.width,
        frames.center.height,
        colors.center_bg,
    ));
    if let Some(right) = frames.right {
        quads.push(rect_quad(
            right.x,
            right.y,
            right.width,
            right.height,
            colors.right_panel_bg,
        ));
    }

    for divider in dividers {
        let color = if highlighted == Some(divider.edge) {
            colors.divider_hover
        } else {
            colors.divider
        };
        quads.push(rect_quad(
            divider.position - DIVIDER_STRIP_WIDTH / 2.0,
            divider.start,
            DIVIDER_STRIP_WIDTH,
            divider.end - divider.start,
            color,
        ));
    }

    quads
}

fn rect_quad(x: f64, y: f64, width: f64, height: f64, color: [f32; 4]) -> QuadInstance {
    QuadInstance {
        rect: [x as f32, y as f32, width as f32, height as f32],
        color,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
