//! Rigid rotation of the square about a pivot.
//!
//! Every pose change in the puzzle goes through [`rotate_about`], whether it is
//! a one-shot ghost preview or a single animation frame, so a pose computed in
//! one step is identical to the same pose reached by interpolation.
//!
//! ## Rotation Convention
//!
//! Angles are in radians on a canvas whose Y axis points down, so positive
//! angles turn clockwise on screen:
//! - 0 = no rotation
//! - π/2 = right becomes down
//! - π = upside down
//! - -π/2 = right becomes up

use super::types::{Corner, Point, Square};

/// Number of corners of the square
pub const CORNER_COUNT: usize = 4;

/// Unit offsets of the axis-aligned corners, in the fixed order
/// top-left, top-right, bottom-right, bottom-left.
const CORNER_SIGNS: [(f64, f64); CORNER_COUNT] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// A 2D rotation around a center point.
#[derive(Debug, Clone, Copy)]
pub struct RotationTransform {
    /// Rotation angle in radians (clockwise positive on a Y-down canvas)
    pub angle: f64,
    /// Center point of rotation
    pub center: Point,
}

impl RotationTransform {
    pub fn new(angle: f64, center: Point) -> Self {
        Self { angle, center }
    }

    /// Check if this is exactly a 0 rad rotation.
    pub fn is_identity(&self) -> bool {
        self.angle == 0.0
    }

    /// Rotate a point around the center.
    ///
    /// ```text
    /// x' = cx + (x - cx) * cos(θ) - (y - cy) * sin(θ)
    /// y' = cy + (x - cx) * sin(θ) + (y - cy) * cos(θ)
    /// ```
    pub fn transform_point(&self, point: Point) -> Point {
        if self.is_identity() {
            return point;
        }

        let cos_a = self.angle.cos();
        let sin_a = self.angle.sin();

        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;

        Point {
            x: self.center.x + dx * cos_a - dy * sin_a,
            y: self.center.y + dx * sin_a + dy * cos_a,
        }
    }
}

/// The four corners of a square, in the order top-left, top-right,
/// bottom-right, bottom-left (labels refer to the unrotated square).
///
/// Callers rely on this order to keep a corner's index stable across frames.
pub fn corners(square: &Square) -> [Corner; CORNER_COUNT] {
    let half = square.half_size();
    let rotation = RotationTransform::new(square.angle, square.center());
    CORNER_SIGNS.map(|(sx, sy)| {
        rotation.transform_point(Point::new(square.x + sx * half, square.y + sy * half))
    })
}

/// Rotate a square rigidly by `delta` radians about `pivot`.
///
/// The returned square's angle is `square.angle + delta` and its center is the
/// image of the old center under the rotation; the size is unchanged.
pub fn rotate_about(square: &Square, pivot: Point, delta: f64) -> Square {
    let center = RotationTransform::new(delta, pivot).transform_point(square.center());
    Square {
        x: center.x,
        y: center.y,
        size: square.size,
        angle: square.angle + delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            approx_eq(actual.x, x) && approx_eq(actual.y, y),
            "expected ({}, {}), got ({}, {})",
            x,
            y,
            actual.x,
            actual.y
        );
    }

    #[test]
    fn test_identity_rotation() {
        let t = RotationTransform::new(0.0, Point::new(50.0, 50.0));
        assert!(t.is_identity());
        let p = Point::new(100.0, 0.0);
        assert_eq!(t.transform_point(p), p);
    }

    #[test]
    fn test_quarter_turn_around_origin() {
        // Right becomes down on a Y-down canvas
        let t = RotationTransform::new(FRAC_PI_2, Point::new(0.0, 0.0));
        assert_point(t.transform_point(Point::new(1.0, 0.0)), 0.0, 1.0);
    }

    #[test]
    fn test_half_turn() {
        let t = RotationTransform::new(PI, Point::new(0.0, 0.0));
        assert_point(t.transform_point(Point::new(1.0, 0.0)), -1.0, 0.0);
    }

    #[test]
    fn test_rotation_around_non_origin_center() {
        let t = RotationTransform::new(FRAC_PI_2, Point::new(50.0, 50.0));
        assert_point(t.transform_point(Point::new(100.0, 50.0)), 50.0, 100.0);
    }

    #[test]
    fn test_axis_aligned_corner_order() {
        let sq = Square::new(300.0, 200.0, 100.0);
        let c = corners(&sq);
        assert_point(c[0], 250.0, 150.0);
        assert_point(c[1], 350.0, 150.0);
        assert_point(c[2], 350.0, 250.0);
        assert_point(c[3], 250.0, 250.0);
    }

    #[test]
    fn test_corners_of_rotated_square() {
        // A quarter turn moves the top-left label to the top-right position
        let sq = Square::new(0.0, 0.0, 2.0).with_angle(FRAC_PI_2);
        let c = corners(&sq);
        assert_point(c[0], 1.0, -1.0);
        assert_point(c[1], 1.0, 1.0);
        assert_point(c[2], -1.0, 1.0);
        assert_point(c[3], -1.0, -1.0);
    }

    #[test]
    fn test_corners_of_diamond() {
        let sq = Square::new(0.0, 0.0, 2.0).with_angle(FRAC_PI_4);
        let c = corners(&sq);
        let r = std::f64::consts::SQRT_2;
        assert_point(c[0], 0.0, -r);
        assert_point(c[1], r, 0.0);
        assert_point(c[2], 0.0, r);
        assert_point(c[3], -r, 0.0);
    }

    #[test]
    fn test_rotate_about_top_left_corner() {
        let sq = Square::new(300.0, 200.0, 100.0);
        let rotated = rotate_about(&sq, Point::new(250.0, 150.0), FRAC_PI_2);
        assert_point(rotated.center(), 200.0, 200.0);
        assert!(approx_eq(rotated.angle, FRAC_PI_2));
        assert_eq!(rotated.size, 100.0);

        // The pivot corner stays put and the top-right corner swings down
        let c = corners(&rotated);
        assert_point(c[0], 250.0, 150.0);
        assert_point(c[1], 250.0, 250.0);
    }

    #[test]
    fn test_rotate_about_zero_delta_is_exact() {
        let sq = Square::new(123.4, 56.7, 80.0).with_angle(0.3);
        assert_eq!(rotate_about(&sq, Point::new(1.0, 2.0), 0.0), sq);
    }

    #[test]
    fn test_rotate_about_preserves_corner_distances() {
        let sq = Square::new(300.0, 200.0, 100.0).with_angle(0.2);
        let pivot = corners(&sq)[2];
        let rotated = rotate_about(&sq, pivot, -1.1);
        for (before, after) in corners(&sq).iter().zip(corners(&rotated).iter()) {
            assert!(
                approx_eq(before.distance(pivot), after.distance(pivot)),
                "distance changed: {} vs {}",
                before.distance(pivot),
                after.distance(pivot)
            );
        }
    }
}
