//! Region rectangle computation.
//!
//! Turns a committed [`LayoutState`] and the viewport into the three
//! on-screen region rects. The center takes whatever is left between
//! the side panels; when the right panel is hidden it extends to the
//! viewport's right edge.

use serde::Serialize;

use sumeru_common::Rect;

use crate::engine::LayoutState;

/// On-screen rectangles for the workspace regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionFrames {
    pub left: Rect,
    pub center: Rect,
    /// `None` when the right panel is hidden.
    pub right: Option<Rect>,
}

/// Compute region frames for the given viewport.
pub fn compute_frames(state: &LayoutState, viewport: Rect, right_visible: bool) -> RegionFrames {
    let left = Rect {
        x: viewport.x,
        y: viewport.y,
        width: state.left_width,
        height: viewport.height,
    };

    let right = right_visible.then(|| Rect {
        x: viewport.right() - state.right_width,
        y: viewport.y,
        width: state.right_width,
        height: viewport.height,
    });

    let reserved = state.left_width + if right_visible { state.right_width } else { 0.0 };
    let center = Rect {
        x: viewport.x + state.left_width,
        y: viewport.y,
        width: (viewport.width - reserved).max(0.0),
        height: viewport.height,
    };

    RegionFrames {
        left,
        center,
        right,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn state(left: f64, right: f64) -> LayoutState {
        LayoutState {
            left_width: left,
            right_width: right,
            active_drag: None,
        }
    }

    fn viewport() -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: 1280.0,
            height: 800.0,
        }
    }

    #[test]
    fn three_regions_partition_the_viewport() {
        let frames = compute_frames(&state(320.0, 320.0), viewport(), true);

        assert_eq!(frames.left.x, 0.0);
        assert_eq!(frames.left.width, 320.0);
        assert_eq!(frames.center.x, 320.0);
        assert_eq!(frames.center.width, 640.0);
        let right = frames.right.unwrap();
        assert_eq!(right.x, 960.0);
        assert_eq!(right.width, 320.0);

        assert_eq!(frames.left.right(), frames.center.x);
        assert_eq!(frames.center.right(), right.x);
        assert_eq!(right.right(), 1280.0);
    }

    #[test]
    fn hidden_right_panel_extends_center() {
        let frames = compute_frames(&state(320.0, 320.0), viewport(), false);

        assert!(frames.right.is_none());
        assert_eq!(frames.center.x, 320.0);
        assert_eq!(frames.center.width, 960.0);
        assert_eq!(frames.center.right(), 1280.0);
    }

    #[test]
    fn frames_honor_viewport_offset() {
        let vp = Rect {
            x: 100.0,
            y: 40.0,
            width: 1000.0,
            height: 700.0,
        };
        let frames = compute_frames(&state(200.0, 250.0), vp, true);

        assert_eq!(frames.left.x, 100.0);
        assert_eq!(frames.left.y, 40.0);
        assert_eq!(frames.left.height, 700.0);
        assert_eq!(frames.center.x, 300.0);
        assert_eq!(frames.right.unwrap().x, 850.0);
    }

    #[test]
    fn center_width_floors_at_zero_when_overcommitted() {
        // Degraded mode: the panels momentarily outsize the viewport.
        let vp = Rect {
            x: 0.0,
            y: 0.0,
            width: 500.0,
            height: 800.0,
        };
        let frames = compute_frames(&state(320.0, 320.0), vp, true);
        assert_eq!(frames.center.width, 0.0);
    }
}
