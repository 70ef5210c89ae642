//! Graceful shutdown: end drags, drop panel surfaces, release the GPU.

use sumeru_layout::drag::PointerHost;

use super::core::SumeruApp;
use super::event_handler::WindowPointerHost;

/// Stand-in host for teardown after the window is already gone; its
/// cursor state dies with it.
struct NoopHost;

impl PointerHost for NoopHost {
    fn capture_pointer(&mut self) {}
    fn release_pointer(&mut self) {}
}

// =============================================================================
// SHUTDOWN
// =============================================================================

impl SumeruApp {
    /// Perform graceful shutdown.
    ///
    /// Order matters:
    /// 1. End any active drag (release the pointer capture)
    /// 2. Drop the panel surface bounds
    /// 3. Release GPU resources
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(ref mut engine) = self.layout {
            match self.window.clone() {
                Some(window) => {
                    let mut host = WindowPointerHost { window: &window };
                    engine.end_drag(&mut host);
                }
                None => engine.end_drag(&mut NoopHost),
            }
        }

        self.panes.clear();
        self.render_state = None;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::SumeruApp;
    use sumeru_config::SumeruConfig;
    use sumeru_layout::drag::PointerHost;
    use sumeru_layout::engine::{DragEdge, LayoutConstraints, PanelLayoutEngine};
    use sumeru_layout::geometry::{ContainerBounds, ContainerGeometry};

    struct FixedGeometry;

    impl ContainerGeometry for FixedGeometry {
        fn bounds(&self) -> ContainerBounds {
            ContainerBounds {
                left: 0.0,
                width: 1280.0,
            }
        }
    }

    struct CountingHost(usize);

    impl PointerHost for CountingHost {
        fn capture_pointer(&mut self) {
            self.0 += 1;
        }
        fn release_pointer(&mut self) {}
    }

    fn engine() -> PanelLayoutEngine {
        PanelLayoutEngine::new(
            320.0,
            320.0,
            LayoutConstraints::default(),
            Box::new(FixedGeometry),
        )
        .unwrap()
    }

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = SumeruApp::new(SumeruConfig::default());

        app.shutdown();

        assert!(app.panes.is_empty());
        assert!(app.render_state.is_none());
        assert!(app.layout.is_none());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = SumeruApp::new(SumeruConfig::default());

        app.shutdown();
        app.shutdown(); // second call must not panic

        assert!(app.panes.is_empty());
        assert!(app.render_state.is_none());
    }

    #[test]
    fn shutdown_ends_an_active_drag() {
        let mut app = SumeruApp::new(SumeruConfig::default());
        let mut engine = engine();
        let mut host = CountingHost(0);
        assert!(engine.begin_drag(DragEdge::Left, &mut host));
        app.layout = Some(engine);

        app.shutdown();

        let engine = app.layout.as_ref().unwrap();
        assert!(!engine.is_dragging());
        assert_eq!(engine.state().active_drag, None);
    }
}
