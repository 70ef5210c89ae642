//! Frame assembly: layout state to chrome quads to GPU.

use sumeru_layout::{compute_dividers, compute_frames};
use sumeru_renderer::build_chrome_quads;

use super::core::SumeruApp;

impl SumeruApp {
    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }

    /// Render a single frame of workspace chrome.
    pub(super) fn render_frame(&mut self) {
        let Some(engine) = self.layout.as_ref() else {
            return;
        };

        let state = engine.state();
        let viewport = self.viewport();
        let frames = compute_frames(&state, viewport, self.right_visible);
        let dividers = compute_dividers(&state, viewport, self.right_visible);
        // The dragged divider stays highlighted even when the pointer
        // outruns its clamped position.
        let highlighted = state.active_drag.or(self.hover_edge);
        let quads = build_chrome_quads(&frames, &dividers, highlighted, &self.chrome_colors);

        if let Some(ref mut rs) = self.render_state {
            if let Err(e) = rs.render_frame(&quads) {
                tracing::error!("Render error: {e}");
            }
        }
    }
}
