//! SumeruApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use sumeru_config::SumeruConfig;
use sumeru_layout::engine::{DragEdge, PanelLayoutEngine};
use sumeru_renderer::{ChromeColors, RenderState};

use super::pane_bridge::PaneSurfaces;

/// Top-level application state.
pub struct SumeruApp {
    pub(super) config: SumeruConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Panel layout (created with the window, it measures the window)
    pub(super) layout: Option<PanelLayoutEngine>,
    pub(super) right_visible: bool,

    // Region bounds for the embedded panel surfaces
    pub(super) panes: PaneSurfaces,

    // Chrome palette, resolved once from config
    pub(super) chrome_colors: ChromeColors,

    // Pointer tracking (winit reports position and buttons separately)
    pub(super) cursor_pos: (f64, f64),
    pub(super) hover_edge: Option<DragEdge>,

    // Whether the app should exit
    pub(super) should_exit: bool,

    // Dirty flag -- set when the layout changes and a redraw is needed
    pub(super) needs_redraw: bool,
}

impl SumeruApp {
    pub fn new(config: SumeruConfig) -> Self {
        let chrome_colors = ChromeColors::from_config(&config.colors);
        let right_visible = config.layout.show_right_panel;
        Self {
            config,
            window: None,
            render_state: None,
            layout: None,
            right_visible,
            panes: PaneSurfaces::new(),
            chrome_colors,
            cursor_pos: (0.0, 0.0),
            hover_edge: None,
            should_exit: false,
            needs_redraw: false,
        }
    }
}
