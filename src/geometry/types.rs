//! Core geometric types for the puzzle board

use serde::Deserialize;

/// A 2D point in canvas coordinates (Y axis pointing down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point
    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Direction of the vector from `origin` to this point, in radians.
    ///
    /// A point coincident with `origin` yields 0.
    pub fn angle_from(&self, origin: Point) -> f64 {
        (self.y - origin.y).atan2(self.x - origin.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One of the four corners derived from a [`Square`]
pub type Corner = Point;

/// The live puzzle piece: center position, side length and rotation in radians.
///
/// The angle is never normalized; it accumulates across moves.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Square {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    #[serde(default)]
    pub angle: f64,
}

impl Square {
    /// Create an axis-aligned square centered at `(x, y)`
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self {
            x,
            y,
            size,
            angle: 0.0,
        }
    }

    /// Set the rotation angle in radians
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn half_size(&self) -> f64 {
        self.size / 2.0
    }

    /// Rotation angle folded into `[0, 2π)`, for display only
    pub fn display_angle(&self) -> f64 {
        self.angle.rem_euclid(std::f64::consts::TAU)
    }
}

/// The pose the square has to reach. Only the position takes part in the win check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSquare {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl TargetSquare {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The target as an axis-aligned square, for drawing
    pub fn as_square(&self) -> Square {
        Square::new(self.x, self.y, self.size)
    }
}
