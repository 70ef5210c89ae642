//! Container measurement for drag-resize.
//!
//! The engine never caches the container's size across pointer moves;
//! it asks a [`ContainerGeometry`] for fresh bounds on every step, so
//! a window resize mid-drag is picked up on the very next move.

use sumeru_common::Rect;

/// The horizontal extent of the layout container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    /// Left edge of the container in the pointer's coordinate space.
    pub left: f64,
    /// Total width of the container.
    pub width: f64,
}

impl From<Rect> for ContainerBounds {
    fn from(rect: Rect) -> Self {
        Self {
            left: rect.x,
            width: rect.width,
        }
    }
}

/// Source of the container's current bounds.
pub trait ContainerGeometry {
    /// Measure the container right now. Called once per pointer move.
    fn bounds(&self) -> ContainerBounds;
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_from_rect() {
        let rect = Rect {
            x: 100.0,
            y: 40.0,
            width: 1000.0,
            height: 700.0,
        };
        let bounds = ContainerBounds::from(rect);
        assert_eq!(bounds.left, 100.0);
        assert_eq!(bounds.width, 1000.0);
    }
}
