//! Pure width-constraint math for panel resizing.
//!
//! Everything here is a function of its arguments. The engine computes
//! the candidate width and the legal bounds, then asks this module to
//! resolve them into a committed width.

// =============================================================================
// CLAMPING
// =============================================================================

/// Resolve a candidate panel width against its legal `[min, max]` range.
///
/// When the container is too small for the range to exist (`max < min`),
/// the minimum wins: the panel keeps its floor width and the layout is
/// allowed to overflow until the container grows again.
pub fn clamp_width(candidate: f64, min: f64, max: f64) -> f64 {
    if max < min {
        return min;
    }
    candidate.clamp(min, max)
}

/// Candidate width for a left-edge drag: distance from the container's
/// left edge to the pointer.
pub fn left_candidate(pointer_x: f64, container_left: f64) -> f64 {
    pointer_x - container_left
}

/// Candidate width for a right-edge drag: distance from the pointer to
/// the container's right edge.
pub fn right_candidate(pointer_x: f64, container_left: f64, container_width: f64) -> f64 {
    container_left + container_width - pointer_x
}

/// Largest width one side may take while the opposite side keeps its
/// current width and the center keeps its floor.
pub fn max_width(container_width: f64, other_side_width: f64, min_center: f64) -> f64 {
    container_width - other_side_width - min_center
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_within_range_passes_through() {
        assert_eq!(clamp_width(300.0, 200.0, 580.0), 300.0);
    }

    #[test]
    fn clamp_below_min() {
        assert_eq!(clamp_width(50.0, 200.0, 580.0), 200.0);
    }

    #[test]
    fn clamp_above_max() {
        assert_eq!(clamp_width(900.0, 200.0, 580.0), 580.0);
    }

    #[test]
    fn clamp_at_boundaries() {
        assert_eq!(clamp_width(200.0, 200.0, 580.0), 200.0);
        assert_eq!(clamp_width(580.0, 200.0, 580.0), 580.0);
    }

    #[test]
    fn clamp_degraded_range_returns_min() {
        // Container shrank so far that max dropped below min.
        assert_eq!(clamp_width(900.0, 200.0, 80.0), 200.0);
        assert_eq!(clamp_width(10.0, 200.0, 80.0), 200.0);
    }

    #[test]
    fn left_candidate_is_offset_from_container_edge() {
        assert_eq!(left_candidate(450.0, 100.0), 350.0);
        assert_eq!(left_candidate(50.0, 0.0), 50.0);
    }

    #[test]
    fn left_candidate_can_go_negative() {
        // Pointer left of the container; the clamp catches it later.
        assert_eq!(left_candidate(40.0, 100.0), -60.0);
    }

    #[test]
    fn right_candidate_is_distance_to_right_edge() {
        assert_eq!(right_candidate(900.0, 0.0, 1000.0), 100.0);
        assert_eq!(right_candidate(700.0, 100.0, 1000.0), 400.0);
    }

    #[test]
    fn max_width_reserves_other_side_and_center() {
        // 1000 wide, opposite panel 320, center floor 100.
        assert_eq!(max_width(1000.0, 320.0, 100.0), 580.0);
    }

    #[test]
    fn max_width_negative_when_container_too_small() {
        assert!(max_width(300.0, 320.0, 100.0) < 0.0);
    }
}
