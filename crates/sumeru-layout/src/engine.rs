//! The panel layout engine and its drag state machine.
//!
//! Holds the committed left/right panel widths and drives resize
//! drags: `begin_drag` captures the pointer, `update_drag` recomputes
//! the dragged side's width from the pointer position and freshly
//! measured container bounds, `end_drag` commits and releases. The
//! event handler calls these from the winit pointer events.

use serde::Serialize;
use tracing::{debug, warn};

use sumeru_common::LayoutError;

use crate::drag::{DragController, PointerHost};
use crate::geometry::ContainerGeometry;
use crate::solver;

// =============================================================================
// TYPES
// =============================================================================

/// Floor width of the center region. Fixed, not configurable: the
/// center must never collapse entirely no matter how the sides are
/// dragged.
pub const MIN_CENTER_WIDTH: f64 = 100.0;

/// Widest container any sane configuration must fit into. Minimum
/// widths that cannot coexist even at this width are a configuration
/// error, rejected at construction.
const SANE_CONTAINER_WIDTH: f64 = 1280.0;

/// Which panel edge a drag is resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DragEdge {
    /// The divider between the left panel and the center.
    Left,
    /// The divider between the center and the right panel.
    Right,
}

/// Minimum widths the sides may never shrink below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutConstraints {
    pub min_left_width: f64,
    pub min_right_width: f64,
}

impl Default for LayoutConstraints {
    fn default() -> Self {
        Self {
            min_left_width: 200.0,
            min_right_width: 200.0,
        }
    }
}

/// Committed layout state, consumed by frame and divider computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutState {
    pub left_width: f64,
    pub right_width: f64,
    /// `Some` while a drag is in progress.
    pub active_drag: Option<DragEdge>,
}

/// The engine: committed state plus the drag resources.
pub struct PanelLayoutEngine {
    state: LayoutState,
    constraints: LayoutConstraints,
    geometry: Box<dyn ContainerGeometry>,
    drag: DragController,
}

// =============================================================================
// ENGINE
// =============================================================================

impl PanelLayoutEngine {
    /// Build an engine over the given container geometry.
    ///
    /// Initial widths below their minimums are raised to them, so the
    /// committed state satisfies the constraints from the start.
    pub fn new(
        left_width: f64,
        right_width: f64,
        constraints: LayoutConstraints,
        geometry: Box<dyn ContainerGeometry>,
    ) -> Result<Self, LayoutError> {
        let required = constraints.min_left_width + constraints.min_right_width + MIN_CENTER_WIDTH;
        if required > SANE_CONTAINER_WIDTH {
            return Err(LayoutError::ImpossibleMinimums {
                required,
                budget: SANE_CONTAINER_WIDTH,
            });
        }

        Ok(Self {
            state: LayoutState {
                left_width: left_width.max(constraints.min_left_width),
                right_width: right_width.max(constraints.min_right_width),
                active_drag: None,
            },
            constraints,
            geometry,
            drag: DragController::new(),
        })
    }

    /// Snapshot of the committed state.
    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn constraints(&self) -> LayoutConstraints {
        self.constraints
    }

    /// Whether a drag is currently in progress.
    pub fn is_dragging(&self) -> bool {
        self.state.active_drag.is_some()
    }

    /// Start a drag on the given edge, capturing the host's pointer.
    ///
    /// Returns `false` without side effects if a drag is already in
    /// progress.
    pub fn begin_drag(&mut self, edge: DragEdge, host: &mut dyn PointerHost) -> bool {
        if self.state.active_drag.is_some() {
            warn!(?edge, "begin_drag while a drag is active, ignoring");
            return false;
        }
        if !self.drag.acquire(host) {
            return false;
        }
        self.state.active_drag = Some(edge);
        debug!(?edge, "drag started");
        true
    }

    /// Feed a pointer position into the active drag.
    ///
    /// Container bounds are measured fresh on every call, never cached
    /// across moves. Does nothing when no drag is active (stray move
    /// events after release are expected and harmless).
    pub fn update_drag(&mut self, pointer_x: f64) {
        let Some(edge) = self.state.active_drag else {
            return;
        };
        let bounds = self.geometry.bounds();

        match edge {
            DragEdge::Left => {
                let candidate = solver::left_candidate(pointer_x, bounds.left);
                let max = solver::max_width(bounds.width, self.state.right_width, MIN_CENTER_WIDTH);
                self.state.left_width =
                    solver::clamp_width(candidate, self.constraints.min_left_width, max);
            }
            DragEdge::Right => {
                let candidate = solver::right_candidate(pointer_x, bounds.left, bounds.width);
                let max = solver::max_width(bounds.width, self.state.left_width, MIN_CENTER_WIDTH);
                self.state.right_width =
                    solver::clamp_width(candidate, self.constraints.min_right_width, max);
            }
        }
    }

    /// End the active drag and release the pointer capture.
    ///
    /// Idempotent: safe on every exit path (button release, focus
    /// loss, teardown), held resources are released exactly once.
    pub fn end_drag(&mut self, host: &mut dyn PointerHost) {
        self.drag.release(host);
        if let Some(edge) = self.state.active_drag.take() {
            debug!(
                ?edge,
                left = self.state.left_width,
                right = self.state.right_width,
                "drag ended"
            );
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
