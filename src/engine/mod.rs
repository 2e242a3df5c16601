//! The pivot-rotation interaction engine.
//!
//! A move takes two clicks. The first click arms a pivot corner; pointer moves
//! then snap the square's other corners onto the pointer, and a second click
//! commits the snapped rotation, which the animator plays out over the
//! following frames. When it settles the move is counted and the win
//! condition is checked.
//!
//! The engine is single-threaded and driven from outside by two event
//! sources: pointer input ([`Engine::on_pointer_down`], [`Engine::on_pointer_move`])
//! and frame ticks ([`Engine::tick`]). Pointer input is ignored while a
//! rotation is running, so at most one rotation is ever in flight.

mod animator;
mod history;
mod hover;
mod pivot;
mod session;
mod win;

pub use animator::{AnimationStep, CancelMode, Completion, Rotation, RotationAnimator};
pub use history::HistoryTracker;
pub use hover::{HoverSnapper, HoverState, SnapTarget};
pub use pivot::{ArmedPivot, PivotSelector, PivotState};
pub use session::Session;
pub use win::WinChecker;

use tracing::{debug, info, trace};

use crate::config::{ConfigError, EngineConfig};
use crate::geometry::{Point, Square};
use crate::level::Level;
use crate::scene::{NullRenderer, Renderer, Scene};

/// Notifications for the host (move counter, win alert)
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The first click of a move picked a pivot corner
    PivotArmed { pivot_index: usize },
    /// The confirming click started a rotation
    RotationCommitted {
        pivot_index: usize,
        target_corner_index: usize,
        delta: f64,
    },
    /// A rotation came to rest and was counted
    RotationCompleted { moves: u32, square: Square },
    /// The square reached the target. Sent once per winning move, shortly after it.
    Solved { moves: u32 },
}

#[derive(Debug, Clone, Copy)]
struct PendingNotice {
    due: f64,
    moves: u32,
}

/// Owns the session and routes input, frames and snapshots between the components
pub struct Engine<R = NullRenderer> {
    config: EngineConfig,
    session: Session,
    selector: PivotSelector,
    snapper: HoverSnapper,
    animator: RotationAnimator,
    judge: WinChecker,
    pending_notices: Vec<PendingNotice>,
    events: Vec<EngineEvent>,
    renderer: R,
}

impl<R: Renderer> Engine<R> {
    /// Start a session on `level`. The first frame is rendered immediately.
    pub fn new(level: &Level, config: EngineConfig, renderer: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Self {
            selector: PivotSelector::new(config.hit_radius),
            snapper: HoverSnapper::new(config.snap_tolerance, config.snap_tie_break),
            animator: RotationAnimator::new(config.rotation_duration_ms),
            judge: WinChecker::new(config.win_tolerance),
            session: Session::new(level),
            pending_notices: Vec::new(),
            events: Vec::new(),
            renderer,
            config,
        };
        engine.render();
        Ok(engine)
    }

    /// Restart on `level`: pivot, hover, history, move counter, any running
    /// rotation and any pending win notice are dropped.
    pub fn reset(&mut self, level: &Level) {
        debug!(level = %level.name, "reset");
        self.session = Session::new(level);
        self.animator.abort();
        self.pending_notices.clear();
        self.render();
    }

    /// Handle a click. Arms a pivot when idle, or commits the hovered
    /// rotation when a pivot is armed; anything else is ignored.
    pub fn on_pointer_down(&mut self, point: Point) {
        if !point.is_finite() {
            debug!(x = point.x, y = point.y, "ignoring non-finite pointer position");
            return;
        }
        if self.animator.is_running() {
            return;
        }

        match self.session.pivot {
            PivotState::Idle => {
                let square = self.session.square;
                if self
                    .selector
                    .select_at(&square, &mut self.session.pivot, point)
                {
                    self.session.hover.clear();
                    if let Some(pivot_index) = self.session.pivot.pivot_index() {
                        debug!(pivot_index, "pivot armed");
                        self.events.push(EngineEvent::PivotArmed { pivot_index });
                    }
                    self.render();
                }
            }
            PivotState::Armed(armed) => {
                if let Some(snap) = self.session.hover.snap {
                    self.commit(armed, snap);
                }
            }
        }
    }

    /// Handle pointer motion. Only meaningful while a pivot is armed.
    pub fn on_pointer_move(&mut self, point: Point) {
        if !point.is_finite() {
            debug!(x = point.x, y = point.y, "ignoring non-finite pointer position");
            return;
        }
        if let PivotState::Armed(armed) = &self.session.pivot {
            self.session.hover = self.snapper.update_hover(armed, point);
            self.render();
        }
    }

    /// Resume the engine at frame timestamp `now` (milliseconds).
    ///
    /// Advances a running rotation by one frame and delivers a due win notice.
    pub fn tick(&mut self, now: f64) {
        if !now.is_finite() {
            debug!(now, "ignoring non-finite frame timestamp");
            return;
        }
        match self.animator.step(&mut self.session.square, now) {
            AnimationStep::Idle => {}
            AnimationStep::Running { progress } => {
                trace!(progress, "rotation frame");
                self.render();
            }
            AnimationStep::Completed(completion) => self.finish_move(completion),
        }
        self.deliver_notice(now);
    }

    /// Bring a running rotation to rest immediately. The move still counts.
    pub fn cancel_rotation(&mut self, mode: CancelMode, now: f64) {
        if !now.is_finite() {
            debug!(now, "ignoring cancel with non-finite timestamp");
            return;
        }
        if let Some(completion) = self.animator.cancel(&mut self.session.square, mode, now) {
            debug!(?mode, "rotation cancelled");
            self.finish_move(completion);
            self.deliver_notice(now);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Whether future ticks still have work to do
    pub fn is_busy(&self) -> bool {
        self.animator.is_running() || !self.pending_notices.is_empty()
    }

    /// Timestamp at which the earliest pending win notice falls due
    pub fn next_deadline(&self) -> Option<f64> {
        self.pending_notices
            .iter()
            .map(|n| n.due)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn scene(&self) -> Scene<'_> {
        self.session.scene()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Remove and return the events queued since the last call
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn commit(&mut self, armed: ArmedPivot, snap: SnapTarget) {
        self.session.history.record(&self.session.square);
        self.selector.cancel(&mut self.session.pivot);
        self.session.hover.clear();

        if !self
            .animator
            .commit(&self.session.square, armed.pivot, snap.angle)
        {
            return;
        }

        let target_corner_index = armed.corner_index_of_other(snap.corner_index);
        info!(
            pivot_index = armed.index,
            target_corner_index,
            delta = snap.angle,
            "rotation committed"
        );
        self.events.push(EngineEvent::RotationCommitted {
            pivot_index: armed.index,
            target_corner_index,
            delta: snap.angle,
        });
        self.render();
    }

    fn finish_move(&mut self, completion: Completion) {
        self.session.moves += 1;
        let moves = self.session.moves;
        info!(
            moves,
            x = completion.end.x,
            y = completion.end.y,
            angle = completion.end.angle,
            "rotation completed"
        );
        self.events.push(EngineEvent::RotationCompleted {
            moves,
            square: completion.end,
        });
        self.render();

        if self
            .judge
            .is_solved(&self.session.square, self.session.target.as_ref())
        {
            self.pending_notices.push(PendingNotice {
                due: completion.finished_at + self.config.win_notice_delay_ms,
                moves,
            });
        }
    }

    /// Send every notice that is due, in the order the wins happened
    fn deliver_notice(&mut self, now: f64) {
        let (due, pending): (Vec<_>, Vec<_>) = self
            .pending_notices
            .drain(..)
            .partition(|notice| now >= notice.due);
        self.pending_notices = pending;

        for notice in due {
            info!(moves = notice.moves, "target reached");
            self.events.push(EngineEvent::Solved {
                moves: notice.moves,
            });
        }
    }

    fn render(&mut self) {
        let scene = self.session.scene();
        self.renderer.render(&scene);
    }
}
