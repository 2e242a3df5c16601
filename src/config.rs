//! Configuration for the interaction engine

use serde::Deserialize;
use thiserror::Error;

/// Upper bound on the delay between a winning move and its notification
pub const MAX_WIN_NOTICE_DELAY_MS: f64 = 100.0;

/// Errors reported by [`EngineConfig::validate`]
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("win_notice_delay_ms must be within 0..={max}, got {value}")]
    NoticeDelayOutOfRange { value: f64, max: f64 },
}

/// Which candidate wins when several other-corners match the pointer distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapTieBreak {
    /// The first matching corner in other-corner order
    #[default]
    FirstMatch,
    /// The last matching corner in other-corner order
    LastMatch,
}

/// Tolerances and timings of the interaction engine
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Radius around a corner that accepts a pivot click, in pixels
    pub hit_radius: f64,

    /// Allowed mismatch between pointer and corner distance from the pivot, in pixels
    pub snap_tolerance: f64,

    /// Maximum center distance from the target that counts as solved, in pixels
    pub win_tolerance: f64,

    /// Duration of a committed rotation
    pub rotation_duration_ms: f64,

    /// Delay between a winning completion and the `Solved` notification
    pub win_notice_delay_ms: f64,

    /// Tie-break for hover snapping
    pub snap_tie_break: SnapTieBreak,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hit_radius: 10.0,
            snap_tolerance: 10.0,
            win_tolerance: 10.0,
            rotation_duration_ms: 500.0,
            win_notice_delay_ms: 100.0,
            snap_tie_break: SnapTieBreak::FirstMatch,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pivot hit radius
    pub fn with_hit_radius(mut self, radius: f64) -> Self {
        self.hit_radius = radius;
        self
    }

    /// Set the snap distance tolerance
    pub fn with_snap_tolerance(mut self, tolerance: f64) -> Self {
        self.snap_tolerance = tolerance;
        self
    }

    /// Set the win distance tolerance
    pub fn with_win_tolerance(mut self, tolerance: f64) -> Self {
        self.win_tolerance = tolerance;
        self
    }

    /// Set the rotation animation duration
    pub fn with_rotation_duration(mut self, millis: f64) -> Self {
        self.rotation_duration_ms = millis;
        self
    }

    /// Set the win notification delay
    pub fn with_win_notice_delay(mut self, millis: f64) -> Self {
        self.win_notice_delay_ms = millis;
        self
    }

    /// Set the hover snapping tie-break
    pub fn with_snap_tie_break(mut self, tie_break: SnapTieBreak) -> Self {
        self.snap_tie_break = tie_break;
        self
    }

    /// Check that every tolerance and duration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("hit_radius", self.hit_radius),
            ("snap_tolerance", self.snap_tolerance),
            ("win_tolerance", self.win_tolerance),
            ("rotation_duration_ms", self.rotation_duration_ms),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        let delay = self.win_notice_delay_ms;
        if !(0.0..=MAX_WIN_NOTICE_DELAY_MS).contains(&delay) {
            return Err(ConfigError::NoticeDelayOutOfRange {
                value: delay,
                max: MAX_WIN_NOTICE_DELAY_MS,
            });
        }

        Ok(())
    }
}
