//! All mutable state of one puzzle session

use crate::geometry::{rotate_about, Square, TargetSquare};
use crate::level::Level;
use crate::scene::Scene;

use super::history::HistoryTracker;
use super::hover::HoverState;
use super::pivot::PivotState;

/// State owned by the engine.
///
/// Components receive the parts they are allowed to touch: the pivot selector
/// writes `pivot`, the hover snapper produces `hover`, the animator writes
/// `square`, and history is only ever appended to.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) level_name: String,
    pub(crate) square: Square,
    pub(crate) target: Option<TargetSquare>,
    pub(crate) pivot: PivotState,
    pub(crate) hover: HoverState,
    pub(crate) history: HistoryTracker,
    pub(crate) moves: u32,
}

impl Session {
    pub fn new(level: &Level) -> Self {
        Self {
            level_name: level.name.clone(),
            square: level.square,
            target: level.target,
            pivot: PivotState::Idle,
            hover: HoverState::default(),
            history: HistoryTracker::new(),
            moves: 0,
        }
    }

    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    pub fn square(&self) -> &Square {
        &self.square
    }

    pub fn target(&self) -> Option<&TargetSquare> {
        self.target.as_ref()
    }

    pub fn pivot(&self) -> &PivotState {
        &self.pivot
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// The pose a confirming click would rotate the square into
    pub fn ghost(&self) -> Option<Square> {
        let armed = self.pivot.armed()?;
        let angle = self.hover.angle()?;
        Some(rotate_about(&self.square, armed.pivot, angle))
    }

    /// Read-only snapshot for the renderer
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            square: &self.square,
            history: self.history.entries(),
            target: self.target.as_ref(),
            ghost: self.ghost(),
            pivot: &self.pivot,
            hover: &self.hover,
            guide_radii: self.pivot.armed().map(|a| a.radii()),
            moves: self.moves,
        }
    }
}
