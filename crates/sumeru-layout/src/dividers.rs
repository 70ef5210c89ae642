//! Divider positions and drag-zone hit testing.
//!
//! The dividers themselves render as hairlines, but the grab zone
//! extends a few pixels to either side so they are actually hittable.
//! The event handler uses these to decide when to start a drag and
//! when to show the resize cursor.

use sumeru_common::Rect;

use crate::engine::{DragEdge, LayoutState};

// =============================================================================
// TYPES
// =============================================================================

/// A draggable vertical divider between two regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider {
    /// Which panel edge this divider resizes.
    pub edge: DragEdge,
    /// X position of the divider line in pixels.
    pub position: f64,
    /// Top of the divider line.
    pub start: f64,
    /// Bottom of the divider line.
    pub end: f64,
}

impl Divider {
    /// Half-width of the hit zone on each side of the line.
    const HIT_HALF_WIDTH: f64 = 6.0;

    /// Test whether a point (x, y) is within the drag zone.
    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        (x - self.position).abs() <= Self::HIT_HALF_WIDTH && y >= self.start && y <= self.end
    }
}

/// Cursor shape implied by what the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorZone {
    /// Not near any divider.
    None,
    /// Near a divider: show the column-resize cursor.
    ColResize,
}

// =============================================================================
// COMPUTATION
// =============================================================================

/// Compute the dividers for the current layout within the viewport.
pub fn compute_dividers(state: &LayoutState, viewport: Rect, right_visible: bool) -> Vec<Divider> {
    let mut dividers = vec![Divider {
        edge: DragEdge::Left,
        position: viewport.x + state.left_width,
        start: viewport.y,
        end: viewport.bottom(),
    }];

    if right_visible {
        dividers.push(Divider {
            edge: DragEdge::Right,
            position: viewport.right() - state.right_width,
            start: viewport.y,
            end: viewport.bottom(),
        });
    }

    dividers
}

/// Find which divider (if any) the cursor is over.
pub fn find_hovered_divider(dividers: &[Divider], x: f64, y: f64) -> Option<&Divider> {
    dividers.iter().find(|d| d.hit_test(x, y))
}

/// Determine the cursor zone from the hovered divider.
pub fn cursor_zone(divider: Option<&Divider>) -> CursorZone {
    match divider {
        Some(_) => CursorZone::ColResize,
        None => CursorZone::None,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> LayoutState {
        LayoutState {
            left_width: 320.0,
            right_width: 320.0,
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
    fn two_dividers_when_right_visible() {
        let dividers = compute_dividers(&state(), viewport(), true);
        assert_eq!(dividers.len(), 2);
        assert_eq!(dividers[0].edge, DragEdge::Left);
        assert_eq!(dividers[0].position, 320.0);
        assert_eq!(dividers[1].edge, DragEdge::Right);
        assert_eq!(dividers[1].position, 960.0);
    }

    #[test]
    fn one_divider_when_right_hidden() {
        let dividers = compute_dividers(&state(), viewport(), false);
        assert_eq!(dividers.len(), 1);
        assert_eq!(dividers[0].edge, DragEdge::Left);
    }

    #[test]
    fn dividers_span_the_viewport_height() {
        let vp = Rect {
            x: 0.0,
            y: 40.0,
            width: 1280.0,
            height: 700.0,
        };
        let dividers = compute_dividers(&state(), vp, true);
        assert_eq!(dividers[0].start, 40.0);
        assert_eq!(dividers[0].end, 740.0);
    }

    #[test]
    fn hit_test_within_zone() {
        let divider = Divider {
            edge: DragEdge::Left,
            position: 320.0,
            start: 0.0,
            end: 800.0,
        };
        assert!(divider.hit_test(320.0, 400.0));
        assert!(divider.hit_test(326.0, 400.0));
        assert!(divider.hit_test(314.0, 400.0));
        assert!(!divider.hit_test(327.0, 400.0));
        assert!(!divider.hit_test(313.0, 400.0));
    }

    #[test]
    fn hit_test_outside_vertical_span() {
        let divider = Divider {
            edge: DragEdge::Left,
            position: 320.0,
            start: 0.0,
            end: 800.0,
        };
        assert!(!divider.hit_test(320.0, -1.0));
        assert!(!divider.hit_test(320.0, 801.0));
    }

    #[test]
    fn find_hovered_picks_the_right_divider() {
        let dividers = compute_dividers(&state(), viewport(), true);
        let hit = find_hovered_divider(&dividers, 958.0, 400.0);
        assert_eq!(hit.unwrap().edge, DragEdge::Right);
        assert!(find_hovered_divider(&dividers, 640.0, 400.0).is_none());
    }

    #[test]
    fn cursor_zone_follows_hover() {
        let dividers = compute_dividers(&state(), viewport(), true);
        let hit = find_hovered_divider(&dividers, 320.0, 400.0);
        assert_eq!(cursor_zone(hit), CursorZone::ColResize);
        assert_eq!(cursor_zone(None), CursorZone::None);
    }
}
