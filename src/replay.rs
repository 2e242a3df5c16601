//! Headless driver: runs a parsed script against an engine on a virtual clock.
//!
//! Pointer commands act at the current virtual time. `wait` moves the clock
//! forward, ticking one frame per interval while the engine has work to do,
//! and jumping straight to the target time when it is idle. A pending win
//! notice is woken at its exact deadline rather than on the next frame
//! boundary. After the last command the replay settles: frames keep coming
//! until no rotation or notice is left.

use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::engine::{Engine, EngineEvent};
use crate::geometry::Square;
use crate::level::{Level, LevelSet};
use crate::scene::Renderer;
use crate::script::{Command, Script};
use crate::ReplayError;

/// Outcome of a replay
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    /// Level active when the replay ended
    pub level: String,
    pub moves: u32,
    /// Whether the win notice fired on the final level
    pub solved: bool,
    pub square: Square,
    pub history_len: usize,
    /// Every engine event, in emission order
    pub events: Vec<EngineEvent>,
    /// Virtual time when the replay settled
    pub elapsed_ms: f64,
}

/// A script runner owning an engine and its virtual clock
pub struct Replay<'a, R: Renderer> {
    engine: Engine<R>,
    levels: &'a LevelSet,
    level: Level,
    clock: f64,
    frame_interval_ms: f64,
    events: Vec<EngineEvent>,
    solved: bool,
}

impl<'a, R: Renderer> Replay<'a, R> {
    pub fn new(
        levels: &'a LevelSet,
        level: &Level,
        config: EngineConfig,
        renderer: R,
        frame_interval_ms: f64,
    ) -> Result<Self, ReplayError> {
        if !(frame_interval_ms.is_finite() && frame_interval_ms > 0.0) {
            return Err(ReplayError::FrameInterval(frame_interval_ms));
        }

        Ok(Self {
            engine: Engine::new(level, config, renderer)?,
            levels,
            level: level.clone(),
            clock: 0.0,
            frame_interval_ms,
            events: Vec::new(),
            solved: false,
        })
    }

    /// Execute every command of `script`, then settle
    pub fn run(&mut self, script: &Script) -> Result<(), ReplayError> {
        for command in &script.commands {
            self.execute(&command.node)?;
        }
        self.settle();
        Ok(())
    }

    /// Execute one command at the current virtual time
    pub fn execute(&mut self, command: &Command) -> Result<(), ReplayError> {
        debug!(command = command.keyword(), clock = self.clock, "replay step");

        match command {
            Command::Level(name) => {
                self.level = self.levels.get(name)?.clone();
                self.restart();
            }
            Command::Reset => self.restart(),
            Command::Down(point) => self.engine.on_pointer_down(*point),
            Command::Move(point) => self.engine.on_pointer_move(*point),
            Command::Click(point) => {
                self.engine.on_pointer_move(*point);
                self.engine.on_pointer_down(*point);
            }
            Command::Wait(ms) => self.advance(*ms),
            Command::Cancel(mode) => self.engine.cancel_rotation(*mode, self.clock),
        }

        self.collect_events();
        Ok(())
    }

    /// Let `ms` of virtual time pass
    pub fn advance(&mut self, ms: f64) {
        let until = self.clock + ms;
        while self.clock < until {
            match self.next_wakeup() {
                Some(at) => self.tick_at(at.min(until)),
                None => self.clock = until,
            }
        }
        self.collect_events();
    }

    /// Keep ticking until no rotation or win notice is pending
    pub fn settle(&mut self) {
        while let Some(at) = self.next_wakeup() {
            self.tick_at(at);
        }
        self.collect_events();
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    pub fn report(&self) -> ReplayReport {
        let session = self.engine.session();
        ReplayReport {
            level: session.level_name().to_string(),
            moves: session.moves(),
            solved: self.solved,
            square: *session.square(),
            history_len: session.history().len(),
            events: self.events.clone(),
            elapsed_ms: self.clock,
        }
    }

    pub fn into_engine(self) -> Engine<R> {
        self.engine
    }

    /// Next timestamp at which the engine wants a tick
    fn next_wakeup(&self) -> Option<f64> {
        if self.engine.is_animating() {
            Some(self.clock + self.frame_interval_ms)
        } else {
            self.engine.next_deadline().map(|due| due.max(self.clock))
        }
    }

    fn tick_at(&mut self, now: f64) {
        trace!(now, "tick");
        self.clock = now;
        self.engine.tick(now);
    }

    fn restart(&mut self) {
        self.engine.reset(&self.level);
        self.solved = false;
    }

    fn collect_events(&mut self) {
        for event in self.engine.take_events() {
            if matches!(event, EngineEvent::Solved { .. }) {
                self.solved = true;
            }
            self.events.push(event);
        }
    }
}
