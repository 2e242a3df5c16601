//! Append-only record of the poses the square has left behind

use crate::geometry::Square;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryTracker {
    entries: Vec<Square>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a copy of `square` as it was before a rotation was committed
    pub fn record(&mut self, square: &Square) {
        self.entries.push(*square);
    }

    /// Every recorded pose, oldest first
    pub fn entries(&self) -> &[Square] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut history = HistoryTracker::new();
        assert!(history.is_empty());

        let first = Square::new(1.0, 2.0, 10.0);
        let second = first.with_angle(0.5);
        history.record(&first);
        history.record(&second);

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries(), &[first, second]);
    }

    #[test]
    fn test_entries_are_copies() {
        let mut history = HistoryTracker::new();
        let mut square = Square::new(0.0, 0.0, 10.0);
        history.record(&square);
        square.x = 99.0;
        assert_eq!(history.entries()[0].x, 0.0);
    }
}
