//! Pure geometry of the puzzle square: corners and rigid rotation about a pivot

pub mod transform;
pub mod types;

pub use transform::{corners, rotate_about, RotationTransform, CORNER_COUNT};
pub use types::{Corner, Point, Square, TargetSquare};
