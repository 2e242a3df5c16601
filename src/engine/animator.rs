//! Time-driven rigid rotation of the square about a fixed pivot.
//!
//! A committed rotation is a suspended task ([`Rotation`]): the scheduler
//! resumes it once per frame through [`RotationAnimator::step`], passing the
//! frame timestamp. The task keeps its start pose, pivot and delta as an
//! immutable capture and only advances a progress cursor, so every frame pose
//! is computed from the start pose and the final pose is exactly
//! `rotate_about(start, pivot, delta)`.

use crate::geometry::{rotate_about, Point, Square};

/// How an in-flight rotation is brought to rest early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelMode {
    /// Jump to the rotation's end pose
    SnapToEnd,
    /// Keep the pose of the last rendered frame
    Freeze,
}

/// An in-flight rotation
#[derive(Debug, Clone)]
pub struct Rotation {
    start: Square,
    pivot: Point,
    delta: f64,
    duration_ms: f64,
    /// Timestamp of the first frame, set when the task first resumes
    start_time: Option<f64>,
    progress: f64,
}

impl Rotation {
    pub fn new(start: Square, pivot: Point, delta: f64, duration_ms: f64) -> Self {
        Self {
            start,
            pivot,
            delta,
            duration_ms,
            start_time: None,
            progress: 0.0,
        }
    }

    /// Pose at elapsed fraction `t` of the rotation
    pub fn pose_at(&self, t: f64) -> Square {
        rotate_about(&self.start, self.pivot, self.delta * t)
    }

    pub fn end_pose(&self) -> Square {
        rotate_about(&self.start, self.pivot, self.delta)
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    fn advance(&mut self, now: f64) -> f64 {
        let start_time = *self.start_time.get_or_insert(now);
        self.progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now - start_time) / self.duration_ms).clamp(0.0, 1.0)
        };
        self.progress
    }

    fn complete(self, end: Square, finished_at: f64) -> Completion {
        Completion {
            start: self.start,
            end,
            pivot: self.pivot,
            delta: self.delta,
            finished_at,
        }
    }
}

/// Produced exactly once, by the step (or cancellation) that ends a rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Completion {
    pub start: Square,
    pub end: Square,
    pub pivot: Point,
    pub delta: f64,
    pub finished_at: f64,
}

/// Outcome of resuming the animator for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationStep {
    /// Nothing in flight
    Idle,
    /// The square moved; more frames to come
    Running { progress: f64 },
    /// The square reached its end pose on this frame
    Completed(Completion),
}

/// Drives at most one rotation at a time
#[derive(Debug, Clone)]
pub struct RotationAnimator {
    duration_ms: f64,
    task: Option<Rotation>,
}

impl RotationAnimator {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            task: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn current(&self) -> Option<&Rotation> {
        self.task.as_ref()
    }

    /// Start rotating `square` by `delta` about `pivot`.
    ///
    /// Refused (returns false) while another rotation is running.
    pub fn commit(&mut self, square: &Square, pivot: Point, delta: f64) -> bool {
        if self.is_running() {
            return false;
        }
        self.task = Some(Rotation::new(*square, pivot, delta, self.duration_ms));
        true
    }

    /// Resume the rotation at frame timestamp `now`, writing the frame pose
    /// into `square`.
    pub fn step(&mut self, square: &mut Square, now: f64) -> AnimationStep {
        let Some(task) = self.task.as_mut() else {
            return AnimationStep::Idle;
        };

        let progress = task.advance(now);
        *square = task.pose_at(progress);

        if progress < 1.0 {
            return AnimationStep::Running { progress };
        }

        match self.task.take() {
            Some(task) => AnimationStep::Completed(task.complete(*square, now)),
            None => AnimationStep::Idle,
        }
    }

    /// End the running rotation early. Returns `None` when idle.
    pub fn cancel(&mut self, square: &mut Square, mode: CancelMode, now: f64) -> Option<Completion> {
        let task = self.task.take()?;
        if mode == CancelMode::SnapToEnd {
            *square = task.end_pose();
        }
        Some(task.complete(*square, now))
    }

    /// Drop the running rotation without completing it
    pub fn abort(&mut self) {
        self.task = None;
    }
}
