//! Pivot Square - a rotation puzzle engine
//!
//! A square sits on a board; each move rotates it rigidly about one of its
//! own corners until another corner lands where the player pointed. The goal
//! is to roll the square onto a target outline.
//!
//! This library provides the interaction engine, an SVG renderer for its
//! scene snapshots, and a headless replay pipeline driven by small scripts.
//!
//! # Example
//!
//! ```rust
//! use pivot_square::replay;
//!
//! let outcome = replay("level free\nclick 250, 150\nmove 250, 250\ndown 250, 250").unwrap();
//! assert_eq!(outcome.report.moves, 1);
//! assert!(outcome.svg.contains("<svg"));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod level;
pub mod renderer;
pub mod replay;
pub mod scene;
pub mod script;
pub mod stylesheet;

pub use config::{ConfigError, EngineConfig, SnapTieBreak};
pub use engine::{CancelMode, Engine, EngineEvent};
pub use error::ScriptError;
pub use geometry::{Point, Square, TargetSquare};
pub use level::{Level, LevelError, LevelSet};
pub use renderer::{render_scene_svg, SvgConfig, SvgRenderer};
pub use replay::{Replay, ReplayReport};
pub use scene::{NullRenderer, Renderer, Scene};
pub use script::{parse, Script};
pub use stylesheet::Stylesheet;

use thiserror::Error;

/// Errors that can occur during the replay pipeline
#[derive(Debug, Error)]
pub enum ReplayError {
    /// Error while parsing the script
    #[error("parse errors: {}", format_script_errors(.0))]
    Parse(Vec<ScriptError>),

    /// Unknown level or invalid level file
    #[error("level error: {0}")]
    Level(#[from] LevelError),

    /// Engine settings out of range
    #[error("invalid engine settings: {0}")]
    Config(#[from] ConfigError),

    #[error("frame interval must be a positive number of milliseconds, got {0}")]
    FrameInterval(f64),
}

impl From<Vec<ScriptError>> for ReplayError {
    fn from(errors: Vec<ScriptError>) -> Self {
        ReplayError::Parse(errors)
    }
}

fn format_script_errors(errors: &[ScriptError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration for the complete replay pipeline
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Levels that `level` commands can name
    pub levels: LevelSet,
    /// Level to start on; the first level of the set when unset
    pub start_level: Option<String>,
    /// Engine tuning
    pub engine: EngineConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
    /// Virtual time between animation frames
    pub frame_interval_ms: f64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        let levels = LevelSet::builtin();
        Self {
            engine: levels.engine.clone(),
            levels,
            start_level: None,
            svg: SvgConfig::default(),
            stylesheet: Stylesheet::default(),
            frame_interval_ms: 16.0,
        }
    }
}

impl ReplayConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a level set, adopting the engine settings it carries
    pub fn with_levels(mut self, levels: LevelSet) -> Self {
        self.engine = levels.engine.clone();
        self.levels = levels;
        self
    }

    pub fn with_start_level(mut self, name: impl Into<String>) -> Self {
        self.start_level = Some(name.into());
        self
    }

    /// Set the engine configuration
    pub fn with_engine(mut self, config: EngineConfig) -> Self {
        self.engine = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    pub fn with_frame_interval(mut self, millis: f64) -> Self {
        self.frame_interval_ms = millis;
        self
    }
}

/// Result of a replay: the summary plus the final frame
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    pub report: ReplayReport,
    /// SVG of the last rendered frame
    pub svg: String,
}

/// Replay a script with default configuration
///
/// This is the main entry point for the library. It parses the script, runs
/// it against the built-in levels on a virtual clock, and returns the final
/// board as SVG.
pub fn replay(source: &str) -> Result<ReplayOutcome, ReplayError> {
    replay_with_config(source, &ReplayConfig::default())
}

/// Replay a script with custom configuration
///
/// # Example
///
/// ```rust
/// use pivot_square::{replay_with_config, EngineConfig, ReplayConfig};
///
/// let config = ReplayConfig::new()
///     .with_start_level("leftRight")
///     .with_engine(EngineConfig::default().with_rotation_duration(100.0));
///
/// let outcome = replay_with_config("wait 10", &config).unwrap();
/// assert_eq!(outcome.report.level, "leftRight");
/// ```
pub fn replay_with_config(
    source: &str,
    config: &ReplayConfig,
) -> Result<ReplayOutcome, ReplayError> {
    let script = parse(source)?;

    let level = match &config.start_level {
        Some(name) => config.levels.get(name)?,
        None => config.levels.first(),
    };

    let renderer = SvgRenderer::new(config.svg.clone(), config.stylesheet.clone());
    let mut run = Replay::new(
        &config.levels,
        level,
        config.engine.clone(),
        renderer,
        config.frame_interval_ms,
    )?;
    run.run(&script)?;

    let report = run.report();
    let svg = run
        .into_engine()
        .into_renderer()
        .into_last_frame()
        .unwrap_or_default();

    Ok(ReplayOutcome { report, svg })
}
