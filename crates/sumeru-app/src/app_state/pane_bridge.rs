//! Bridge between layout frames and the embedded panel surfaces.
//!
//! Panel contents render into their own surfaces positioned over the
//! chrome; this module keeps each region's bounds current so those
//! surfaces track every layout change.

use std::collections::HashMap;

use sumeru_common::{Rect, Region};
use sumeru_layout::compute_frames;
use sumeru_layout::frames::RegionFrames;

use super::core::SumeruApp;

// =============================================================================
// PANE SURFACES
// =============================================================================

/// Current bounds of each region's panel surface.
#[derive(Debug, Default)]
pub(super) struct PaneSurfaces {
    bounds: HashMap<Region, Rect>,
}

impl PaneSurfaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tracked bounds with the given frames. A hidden
    /// right panel drops its entry.
    pub fn update(&mut self, frames: &RegionFrames) {
        self.bounds.insert(Region::Left, frames.left);
        self.bounds.insert(Region::Center, frames.center);
        match frames.right {
            Some(right) => {
                self.bounds.insert(Region::Right, right);
            }
            None => {
                self.bounds.remove(&Region::Right);
            }
        }
    }

    pub fn bounds(&self, region: Region) -> Option<Rect> {
        self.bounds.get(&region).copied()
    }

    pub fn clear(&mut self) {
        self.bounds.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

impl SumeruApp {
    /// Push the current region frames to the panel surfaces.
    pub(super) fn sync_pane_bounds(&mut self) {
        let Some(engine) = self.layout.as_ref() else {
            return;
        };
        let frames = compute_frames(&engine.state(), self.viewport(), self.right_visible);
        self.panes.update(&frames);
        tracing::trace!(?frames, "pane bounds synced");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sumeru_layout::engine::LayoutState;

    fn frames(right_visible: bool) -> RegionFrames {
        let state = LayoutState {
            left_width: 320.0,
            right_width: 320.0,
            active_drag: None,
        };
        let viewport = Rect {
            x: 0.0,
            y: 0.0,
            width: 1280.0,
            height: 800.0,
        };
        compute_frames(&state, viewport, right_visible)
    }

    #[test]
    fn update_tracks_all_three_regions() {
        let mut panes = PaneSurfaces::new();
        panes.update(&frames(true));

        assert_eq!(panes.bounds(Region::Left).unwrap().width, 320.0);
        assert_eq!(panes.bounds(Region::Center).unwrap().x, 320.0);
        assert_eq!(panes.bounds(Region::Right).unwrap().x, 960.0);
    }

    #[test]
    fn hiding_right_panel_removes_its_surface() {
        let mut panes = PaneSurfaces::new();
        panes.update(&frames(true));
        assert!(panes.bounds(Region::Right).is_some());

        panes.update(&frames(false));
        assert!(panes.bounds(Region::Right).is_none());
        // Center expanded into the freed space
        assert_eq!(panes.bounds(Region::Center).unwrap().width, 960.0);
    }

    #[test]
    fn clear_empties_all_surfaces() {
        let mut panes = PaneSurfaces::new();
        panes.update(&frames(true));
        assert!(!panes.is_empty());

        panes.clear();
        assert!(panes.is_empty());
        assert!(panes.bounds(Region::Left).is_none());
    }
}
