//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, Window, WindowId};

use sumeru_common::Rect;
use sumeru_layout::dividers::{compute_dividers, cursor_zone, find_hovered_divider, CursorZone};
use sumeru_layout::drag::PointerHost;

use super::core::SumeruApp;

// =============================================================================
// POINTER HOST
// =============================================================================

/// Pointer capture backed by the winit window.
///
/// winit already routes cursor events to the window while a mouse
/// button is held, so capture here swaps the cursor to the resize
/// shape for the drag's duration and restores it on release.
pub(super) struct WindowPointerHost<'a> {
    pub(super) window: &'a Window,
}

impl PointerHost for WindowPointerHost<'_> {
    fn capture_pointer(&mut self) {
        self.window.set_cursor(CursorIcon::ColResize);
    }

    fn release_pointer(&mut self) {
        self.window.set_cursor(CursorIcon::Default);
    }
}

// =============================================================================
// EVENT LOOP
// =============================================================================

impl ApplicationHandler for SumeruApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                    self.sync_pane_bounds();
                    self.needs_redraw = true;
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position.x, position.y);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(state, button);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
                self.needs_redraw = false;
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        if self.needs_redraw {
            self.request_redraw();
        }
    }
}

// =============================================================================
// INPUT HANDLING
// =============================================================================

impl SumeruApp {
    /// Compute the current viewport rect from the window.
    pub(super) fn viewport(&self) -> Rect {
        match &self.window {
            Some(w) => {
                let size = w.inner_size();
                Rect {
                    x: 0.0,
                    y: 0.0,
                    width: size.width as f64,
                    height: size.height as f64,
                }
            }
            None => Rect {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
        }
    }

    /// Handle cursor movement: feed the active drag, or track divider
    /// hover for the cursor shape and highlight.
    fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_pos = (x, y);

        if self.layout.as_ref().is_some_and(|l| l.is_dragging()) {
            if let Some(ref mut engine) = self.layout {
                engine.update_drag(x);
            }
            self.sync_pane_bounds();
            self.needs_redraw = true;
            return;
        }

        let viewport = self.viewport();
        let (zone, edge) = match self.layout {
            Some(ref engine) => {
                let dividers = compute_dividers(&engine.state(), viewport, self.right_visible);
                let hovered = find_hovered_divider(&dividers, x, y);
                (cursor_zone(hovered), hovered.map(|d| d.edge))
            }
            None => (CursorZone::None, None),
        };

        if edge != self.hover_edge {
            self.hover_edge = edge;
            self.needs_redraw = true;
        }

        let icon = match zone {
            CursorZone::ColResize => CursorIcon::ColResize,
            CursorZone::None => CursorIcon::Default,
        };
        if let Some(ref w) = self.window {
            w.set_cursor(icon);
        }
    }

    /// Handle mouse button press/release: start or stop a divider drag.
    fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        let Some(window) = self.window.clone() else {
            return;
        };
        let mut host = WindowPointerHost { window: &window };

        match state {
            ElementState::Pressed => {
                let (x, y) = self.cursor_pos;
                let viewport = self.viewport();
                if let Some(ref mut engine) = self.layout {
                    let dividers = compute_dividers(&engine.state(), viewport, self.right_visible);
                    if let Some(edge) = find_hovered_divider(&dividers, x, y).map(|d| d.edge) {
                        if engine.begin_drag(edge, &mut host) {
                            self.needs_redraw = true;
                        }
                    }
                }
            }
            ElementState::Released => {
                if let Some(ref mut engine) = self.layout {
                    engine.end_drag(&mut host);
                }
                self.needs_redraw = true;
            }
        }
    }

    /// Process a keyboard input event.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        if event.logical_key == Key::Named(NamedKey::F2) {
            self.toggle_right_panel();
        }
    }

    /// Show or hide the right panel. A drag on its divider cannot
    /// outlive the divider, so any active drag ends first.
    fn toggle_right_panel(&mut self) {
        if let (Some(window), Some(engine)) = (self.window.clone(), self.layout.as_mut()) {
            let mut host = WindowPointerHost { window: &window };
            engine.end_drag(&mut host);
        }
        self.right_visible = !self.right_visible;
        self.hover_edge = None;
        tracing::info!(visible = self.right_visible, "right panel toggled");
        self.sync_pane_bounds();
        self.needs_redraw = true;
    }
}
