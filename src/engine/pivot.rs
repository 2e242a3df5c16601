//! Pivot selection: hit-testing pointer clicks against the square's corners

use crate::geometry::{corners, Corner, Point, Square, CORNER_COUNT};

/// A pivot chosen by the first click of a move, awaiting the confirming click
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmedPivot {
    /// Position of the pivot corner when it was selected
    pub pivot: Corner,
    /// Index of the pivot within the square's corner order
    pub index: usize,
    /// The remaining three corners, in corner order
    pub other_corners: [Corner; CORNER_COUNT - 1],
}

impl ArmedPivot {
    fn new(all: [Corner; CORNER_COUNT], index: usize) -> Self {
        let mut others = all
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, c)| *c);

        Self {
            pivot: all[index],
            index,
            other_corners: std::array::from_fn(|_| others.next().unwrap_or_default()),
        }
    }

    /// Distance from the pivot to each other corner: the radii of the circles
    /// those corners sweep when the square turns about the pivot.
    pub fn radii(&self) -> [f64; CORNER_COUNT - 1] {
        self.other_corners.map(|c| c.distance(self.pivot))
    }

    /// Index in the square's corner order of the `n`th other corner
    pub fn corner_index_of_other(&self, n: usize) -> usize {
        if n < self.index {
            n
        } else {
            n + 1
        }
    }
}

/// Pivot selection state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PivotState {
    /// No pivot chosen
    #[default]
    Idle,
    /// Pivot chosen, waiting for the confirming click
    Armed(ArmedPivot),
}

impl PivotState {
    pub fn armed(&self) -> Option<&ArmedPivot> {
        match self {
            PivotState::Armed(armed) => Some(armed),
            PivotState::Idle => None,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, PivotState::Armed(_))
    }

    pub fn pivot_index(&self) -> Option<usize> {
        self.armed().map(|a| a.index)
    }
}

/// Hit-tests clicks against the corners of the square
#[derive(Debug, Clone, Copy)]
pub struct PivotSelector {
    hit_radius: f64,
}

impl PivotSelector {
    pub fn new(hit_radius: f64) -> Self {
        Self { hit_radius }
    }

    /// Index of the first corner strictly within the hit radius of `point`
    pub fn hit_test(&self, square: &Square, point: Point) -> Option<usize> {
        let limit = self.hit_radius * self.hit_radius;
        corners(square)
            .iter()
            .position(|corner| corner.distance_squared(point) < limit)
    }

    /// Arm the pivot under `point`. Only acts while idle; returns whether a
    /// pivot was armed.
    pub fn select_at(&self, square: &Square, state: &mut PivotState, point: Point) -> bool {
        if state.is_armed() {
            return false;
        }

        match self.hit_test(square, point) {
            Some(index) => {
                *state = PivotState::Armed(ArmedPivot::new(corners(square), index));
                true
            }
            None => false,
        }
    }

    /// Drop the armed pivot
    pub fn cancel(&self, state: &mut PivotState) {
        *state = PivotState::Idle;
    }
}
