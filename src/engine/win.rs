//! Win condition: the square's center within tolerance of the target's center.
//!
//! Only position counts. Orientation and the target's size are ignored, so any
//! rotation of the square parked on the target solves the level.

use crate::geometry::{Square, TargetSquare};

#[derive(Debug, Clone, Copy)]
pub struct WinChecker {
    tolerance: f64,
}

impl WinChecker {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Whether `square` sits on `target`. Without a target nothing is solved.
    pub fn is_solved(&self, square: &Square, target: Option<&TargetSquare>) -> bool {
        match target {
            Some(target) => square.center().distance(target.center()) <= self.tolerance,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> TargetSquare {
        TargetSquare::new(650.0, 300.0, 100.0)
    }

    #[test]
    fn test_within_tolerance() {
        let judge = WinChecker::new(10.0);
        for (dx, dy) in [(10.0, 0.0), (-10.0, 0.0), (0.0, 10.0), (0.0, -10.0), (6.0, 8.0)] {
            let sq = Square::new(650.0 + dx, 300.0 + dy, 100.0);
            assert!(judge.is_solved(&sq, Some(&target())), "offset ({dx}, {dy})");
        }
    }

    #[test]
    fn test_outside_tolerance() {
        let judge = WinChecker::new(10.0);
        for (dx, dy) in [(11.0, 0.0), (-11.0, 0.0), (0.0, 11.0), (0.0, -11.0), (8.0, 8.0)] {
            let sq = Square::new(650.0 + dx, 300.0 + dy, 100.0);
            assert!(!judge.is_solved(&sq, Some(&target())), "offset ({dx}, {dy})");
        }
    }

    #[test]
    fn test_orientation_is_ignored() {
        let judge = WinChecker::new(10.0);
        let sq = Square::new(650.0, 300.0, 100.0).with_angle(0.7);
        assert!(judge.is_solved(&sq, Some(&target())));
    }

    #[test]
    fn test_missing_target_is_never_solved() {
        let judge = WinChecker::new(10.0);
        assert!(!judge.is_solved(&Square::new(0.0, 0.0, 100.0), None));
    }
}
