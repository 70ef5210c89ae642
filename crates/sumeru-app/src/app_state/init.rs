//! Window creation, renderer initialization, and layout engine setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use sumeru_layout::engine::{LayoutConstraints, PanelLayoutEngine};
use sumeru_layout::geometry::{ContainerBounds, ContainerGeometry};
use sumeru_renderer::RenderState;

use super::core::SumeruApp;

// =============================================================================
// GEOMETRY
// =============================================================================

/// Container geometry backed by the live window.
///
/// Measured on every query, never cached, so a resize mid-drag is
/// reflected on the next pointer move.
pub(super) struct WindowGeometry(pub(super) Arc<Window>);

impl ContainerGeometry for WindowGeometry {
    fn bounds(&self) -> ContainerBounds {
        let size = self.0.inner_size();
        ContainerBounds {
            left: 0.0,
            width: size.width as f64,
        }
    }
}

// =============================================================================
// INITIALIZATION
// =============================================================================

impl SumeruApp {
    /// Create the window, the GPU renderer, and the layout engine.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        match pollster::block_on(RenderState::new(window.clone())) {
            Ok(mut rs) => {
                rs.set_clear_color(self.chrome_colors.background);
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        let engine = PanelLayoutEngine::new(
            self.config.layout.left_width,
            self.config.layout.right_width,
            LayoutConstraints {
                min_left_width: self.config.layout.min_left_width,
                min_right_width: self.config.layout.min_right_width,
            },
            Box::new(WindowGeometry(window.clone())),
        );
        match engine {
            Ok(engine) => self.layout = Some(engine),
            Err(e) => {
                // Minimum widths that cannot coexist are a fatal config error
                tracing::error!("Failed to build layout engine: {e}");
                return false;
            }
        }

        self.window = Some(window);
        self.sync_pane_bounds();
        tracing::info!("Window created and renderer initialized");
        true
    }
}
