//! The render contract: a read-only snapshot of the session handed to a
//! [`Renderer`] after every frame or state change.

use crate::engine::{HoverState, PivotState};
use crate::geometry::{Square, TargetSquare, CORNER_COUNT};

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    /// The live square
    pub square: &'a Square,
    /// Previous poses, oldest first
    pub history: &'a [Square],
    pub target: Option<&'a TargetSquare>,
    /// Preview of the pose a confirming click would produce
    pub ghost: Option<Square>,
    /// Pivot selection, for highlighting the pivot corner
    pub pivot: &'a PivotState,
    pub hover: &'a HoverState,
    /// Pivot-to-other-corner distances, for guide circles around the pivot
    pub guide_radii: Option<[f64; CORNER_COUNT - 1]>,
    pub moves: u32,
}

/// Consumer of scene snapshots
pub trait Renderer {
    fn render(&mut self, scene: &Scene<'_>);
}

/// Discards every frame
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _scene: &Scene<'_>) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, scene: &Scene<'_>) {
        (**self).render(scene)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, scene: &Scene<'_>) {
        (**self).render(scene)
    }
}
