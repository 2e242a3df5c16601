//! Hover snapping: which other corner the pointer is about to carry, and how far.
//!
//! Turning the square about the pivot keeps every other corner on a circle
//! around it, so a corner is a snap candidate exactly when the pointer's
//! distance from the pivot matches that corner's distance (within tolerance).

use crate::config::SnapTieBreak;
use crate::geometry::Point;

use super::pivot::ArmedPivot;

/// A corner the pointer currently lines up with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    /// Rotation about the pivot that moves the corner under the pointer, in radians
    pub angle: f64,
    /// Index of the corner within the armed pivot's other corners
    pub corner_index: usize,
}

/// Result of the latest pointer move while a pivot is armed
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverState {
    pub snap: Option<SnapTarget>,
}

impl HoverState {
    pub fn angle(&self) -> Option<f64> {
        self.snap.map(|s| s.angle)
    }

    pub fn target_corner_index(&self) -> Option<usize> {
        self.snap.map(|s| s.corner_index)
    }

    pub fn clear(&mut self) {
        self.snap = None;
    }
}

/// Derives the snap angle from the pointer position
#[derive(Debug, Clone, Copy)]
pub struct HoverSnapper {
    tolerance: f64,
    tie_break: SnapTieBreak,
}

impl HoverSnapper {
    pub fn new(tolerance: f64, tie_break: SnapTieBreak) -> Self {
        Self {
            tolerance,
            tie_break,
        }
    }

    /// Recompute the hover state for a pointer at `point`
    pub fn update_hover(&self, armed: &ArmedPivot, point: Point) -> HoverState {
        let pivot = armed.pivot;
        let pointer_distance = point.distance(pivot);
        let target_angle = point.angle_from(pivot);

        let mut candidates =
            armed
                .other_corners
                .iter()
                .enumerate()
                .filter_map(|(corner_index, corner)| {
                    let corner_distance = corner.distance(pivot);
                    ((pointer_distance - corner_distance).abs() < self.tolerance).then(|| {
                        SnapTarget {
                            angle: target_angle - corner.angle_from(pivot),
                            corner_index,
                        }
                    })
                });

        let snap = match self.tie_break {
            SnapTieBreak::FirstMatch => candidates.next(),
            SnapTieBreak::LastMatch => candidates.last(),
        };

        HoverState { snap }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::pivot::{PivotSelector, PivotState};
    use crate::geometry::Square;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPSILON: f64 = 1e-9;

    fn armed_at(square: &Square, click: Point) -> ArmedPivot {
        let mut state = PivotState::Idle;
        assert!(PivotSelector::new(10.0).select_at(square, &mut state, click));
        *state.armed().unwrap()
    }

    fn top_left_pivot() -> ArmedPivot {
        armed_at(&Square::new(300.0, 200.0, 100.0), Point::new(250.0, 150.0))
    }

    #[test]
    fn test_quarter_turn_onto_adjacent_corner_circle() {
        let snapper = HoverSnapper::new(10.0, SnapTieBreak::FirstMatch);
        let hover = snapper.update_hover(&top_left_pivot(), Point::new(250.0, 250.0));
        assert_eq!(hover.target_corner_index(), Some(0));
        let angle = hover.angle().unwrap();
        assert!(
            (angle - FRAC_PI_2).abs() < EPSILON,
            "expected π/2, got {}",
            angle
        );
    }

    #[test]
    fn test_last_match_prefers_later_corner() {
        // Both adjacent corners sit 100 px from the pivot
        let snapper = HoverSnapper::new(10.0, SnapTieBreak::LastMatch);
        let hover = snapper.update_hover(&top_left_pivot(), Point::new(250.0, 250.0));
        assert_eq!(hover.target_corner_index(), Some(2));
        assert!(hover.angle().unwrap().abs() < EPSILON);
    }

    #[test]
    fn test_pointer_on_corner_snaps_with_zero_angle() {
        let snapper = HoverSnapper::new(10.0, SnapTieBreak::FirstMatch);
        let armed = top_left_pivot();
        for n in [0, 1] {
            let hover = snapper.update_hover(&armed, armed.other_corners[n]);
            assert_eq!(hover.target_corner_index(), Some(n));
            assert!(hover.angle().unwrap().abs() < EPSILON);
        }
    }

    #[test]
    fn test_diagonal_corner_circle() {
        let snapper = HoverSnapper::new(10.0, SnapTieBreak::FirstMatch);
        // Straight below the pivot at the diagonal distance: 45° past the
        // diagonal corner's direction
        let r = 100.0 * std::f64::consts::SQRT_2;
        let hover = snapper.update_hover(&top_left_pivot(), Point::new(250.0, 150.0 + r));
        assert_eq!(hover.target_corner_index(), Some(1));
        assert!((hover.angle().unwrap() - FRAC_PI_4).abs() < EPSILON);
    }

    #[test]
    fn test_snap_tolerance_is_strict() {
        let snapper = HoverSnapper::new(10.0, SnapTieBreak::FirstMatch);
        let armed = top_left_pivot();
        // 110 px from the pivot: off by exactly the tolerance
        assert_eq!(
            snapper.update_hover(&armed, Point::new(360.0, 150.0)),
            HoverState::default()
        );
        assert_eq!(
            snapper
                .update_hover(&armed, Point::new(359.0, 150.0))
                .target_corner_index(),
            Some(0)
        );
    }

    #[test]
    fn test_no_candidate_clears_hover() {
        let snapper = HoverSnapper::new(10.0, SnapTieBreak::FirstMatch);
        let hover = snapper.update_hover(&top_left_pivot(), Point::new(300.0, 200.0));
        assert_eq!(hover.angle(), None);
        assert_eq!(hover.target_corner_index(), None);
    }

    #[test]
    fn test_pointer_on_pivot_is_not_a_snap() {
        let snapper = HoverSnapper::new(10.0, SnapTieBreak::FirstMatch);
        let armed = top_left_pivot();
        assert_eq!(snapper.update_hover(&armed, armed.pivot).snap, None);
    }

    #[test]
    fn test_degenerate_square_pointer_on_pivot() {
        // With a side shorter than the tolerance, the pivot itself lies on
        // every corner circle; atan2(0, 0) gives 0 and the result is finite
        let tiny = Square::new(0.0, 0.0, 4.0);
        let armed = armed_at(&tiny, Point::new(-2.0, -2.0));
        let snapper = HoverSnapper::new(10.0, SnapTieBreak::FirstMatch);
        let hover = snapper.update_hover(&armed, armed.pivot);
        assert_eq!(hover.target_corner_index(), Some(0));
        assert!(hover.angle().unwrap().is_finite());
    }
}
