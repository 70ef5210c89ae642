//! Three-region panel layout engine.
//!
//! The engine owns the committed widths of the left and right panels
//! and runs the drag-resize state machine. Pure width math lives in
//! [`solver`], container measurement behind the [`geometry`] trait,
//! and the global pointer-capture lifecycle in [`drag`]. [`frames`]
//! and [`dividers`] derive the on-screen rectangles and the drag hit
//! zones from a committed state.

pub mod dividers;
pub mod drag;
pub mod engine;
pub mod frames;
pub mod geometry;
pub mod solver;

pub use dividers::{compute_dividers, cursor_zone, find_hovered_divider, CursorZone, Divider};
pub use drag::{DragController, PointerHost};
pub use engine::{DragEdge, LayoutConstraints, LayoutState, PanelLayoutEngine, MIN_CENTER_WIDTH};
pub use frames::{compute_frames, RegionFrames};
pub use geometry::{ContainerBounds, ContainerGeometry};
