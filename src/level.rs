//! Level catalogue: starting poses and targets.
//!
//! Levels come from the built-in difficulty set or from a TOML file:
//!
//! ```toml
//! [engine]
//! win_tolerance = 12.0
//!
//! [[level]]
//! name = "leftRight"
//! description = "Cross the board"
//! square = { x = 150, y = 300, size = 100 }
//! target = { x = 650, y = 300 }
//! ```
//!
//! A target without a size takes the square's size.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::{ConfigError, EngineConfig};
use crate::geometry::{Square, TargetSquare};

/// Errors that can occur when loading a level file or looking up a level
#[derive(Error, Debug)]
pub enum LevelError {
    #[error("Failed to read level file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse level TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid engine settings: {0}")]
    Config(#[from] ConfigError),
    #[error("level file defines no levels")]
    Empty,
    #[error("level '{name}' is defined more than once")]
    Duplicate { name: String },
    #[error("invalid square in level '{level}': {reason}")]
    InvalidSquare { level: String, reason: String },
    #[error("unknown level '{name}' (available: {available})")]
    UnknownLevel { name: String, available: String },
}

/// A starting pose plus an optional target
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub name: String,
    pub description: Option<String>,
    pub square: Square,
    pub target: Option<TargetSquare>,
}

impl Level {
    /// Create a free-play level with no target
    pub fn new(name: impl Into<String>, square: Square) -> Self {
        Self {
            name: name.into(),
            description: None,
            square,
            target: None,
        }
    }

    pub fn with_target(mut self, target: TargetSquare) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An ordered set of levels with the engine settings they are meant for
#[derive(Debug, Clone)]
pub struct LevelSet {
    pub engine: EngineConfig,
    levels: Vec<Level>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlLevelFile {
    #[serde(default)]
    engine: EngineConfig,
    #[serde(default, rename = "level")]
    levels: Vec<TomlLevel>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlLevel {
    name: String,
    description: Option<String>,
    square: Square,
    target: Option<TomlTarget>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlTarget {
    x: f64,
    y: f64,
    size: Option<f64>,
}

/// Built-in difficulties on an 800x600 board
const BUILTIN_LEVELS: &str = r#"
[[level]]
name = "free"
description = "Free play without a target"
square = { x = 300, y = 200, size = 100 }

[[level]]
name = "leftRight"
description = "Roll the square from the left side to the right side"
square = { x = 150, y = 300, size = 100 }
target = { x = 650, y = 300 }

[[level]]
name = "topBottom"
description = "Roll the square from the top down to the bottom"
square = { x = 400, y = 100, size = 100 }
target = { x = 400, y = 500 }

[[level]]
name = "diagonal"
description = "Roll the square from the top-left to the bottom-right"
square = { x = 150, y = 100, size = 100 }
target = { x = 650, y = 500 }
"#;

impl LevelSet {
    /// The built-in difficulty set
    pub fn builtin() -> Self {
        Self::from_str(BUILTIN_LEVELS).expect("Built-in levels should be valid TOML")
    }

    /// Load levels from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LevelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load levels from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, LevelError> {
        let parsed: TomlLevelFile = toml::from_str(content)?;
        parsed.engine.validate()?;

        if parsed.levels.is_empty() {
            return Err(LevelError::Empty);
        }

        let mut levels: Vec<Level> = Vec::with_capacity(parsed.levels.len());
        for raw in parsed.levels {
            if levels.iter().any(|l| l.name == raw.name) {
                return Err(LevelError::Duplicate { name: raw.name });
            }
            levels.push(raw.into_level()?);
        }

        Ok(Self {
            engine: parsed.engine,
            levels,
        })
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// The first level of the set
    pub fn first(&self) -> &Level {
        &self.levels[0]
    }

    /// Look up a level by name
    pub fn get(&self, name: &str) -> Result<&Level, LevelError> {
        self.levels
            .iter()
            .find(|l| l.name == name)
            .ok_or_else(|| LevelError::UnknownLevel {
                name: name.to_string(),
                available: self
                    .levels
                    .iter()
                    .map(|l| l.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl TomlLevel {
    fn into_level(self) -> Result<Level, LevelError> {
        let square = self.square;
        let invalid = |reason: &str| LevelError::InvalidSquare {
            level: self.name.clone(),
            reason: reason.to_string(),
        };

        if !(square.x.is_finite() && square.y.is_finite() && square.angle.is_finite()) {
            return Err(invalid("position and angle must be finite"));
        }
        if !(square.size.is_finite() && square.size > 0.0) {
            return Err(invalid("size must be positive"));
        }

        let target = match self.target {
            Some(t) if !(t.x.is_finite() && t.y.is_finite()) => {
                return Err(invalid("target position must be finite"));
            }
            Some(t) => Some(TargetSquare::new(t.x, t.y, t.size.unwrap_or(square.size))),
            None => None,
        };

        Ok(Level {
            name: self.name,
            description: self.description,
            square,
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_levels() {
        let set = LevelSet::builtin();
        let names: Vec<_> = set.levels().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["free", "leftRight", "topBottom", "diagonal"]);
        assert_eq!(set.first().name, "free");
        assert_eq!(set.engine, EngineConfig::default());
    }

    #[test]
    fn test_builtin_diagonal() {
        let set = LevelSet::builtin();
        let level = set.get("diagonal").unwrap();
        assert_eq!(level.square, Square::new(150.0, 100.0, 100.0));
        assert_eq!(level.target, Some(TargetSquare::new(650.0, 500.0, 100.0)));
    }

    #[test]
    fn test_free_level_has_no_target() {
        let set = LevelSet::builtin();
        assert_eq!(set.get("free").unwrap().target, None);
    }

    #[test]
    fn test_unknown_level_lists_available() {
        let set = LevelSet::builtin();
        let err = set.get("sideways").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("sideways"));
        assert!(message.contains("leftRight"));
    }

    #[test]
    fn test_parse_with_engine_table() {
        let set = LevelSet::from_str(
            r#"
[engine]
win_tolerance = 20.0

[[level]]
name = "tilted"
square = { x = 10, y = 20, size = 40, angle = 0.5 }
target = { x = 100, y = 20, size = 60 }
"#,
        )
        .expect("Should parse");
        assert_eq!(set.engine.win_tolerance, 20.0);
        let level = set.get("tilted").unwrap();
        assert_eq!(level.square, Square::new(10.0, 20.0, 40.0).with_angle(0.5));
        assert_eq!(level.target, Some(TargetSquare::new(100.0, 20.0, 60.0)));
        assert_eq!(level.description, None);
    }

    #[test]
    fn test_rejects_empty_file() {
        assert!(matches!(LevelSet::from_str(""), Err(LevelError::Empty)));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = LevelSet::from_str(
            r#"
[[level]]
name = "a"
square = { x = 0, y = 0, size = 10 }

[[level]]
name = "a"
square = { x = 5, y = 5, size = 10 }
"#,
        );
        assert!(matches!(result, Err(LevelError::Duplicate { .. })));
    }

    #[test]
    fn test_rejects_non_positive_size() {
        let result = LevelSet::from_str(
            r#"
[[level]]
name = "flat"
square = { x = 0, y = 0, size = 0 }
"#,
        );
        assert!(matches!(result, Err(LevelError::InvalidSquare { .. })));
    }

    #[test]
    fn test_rejects_invalid_engine_settings() {
        let result = LevelSet::from_str(
            r#"
[engine]
win_notice_delay_ms = 500.0

[[level]]
name = "a"
square = { x = 0, y = 0, size = 10 }
"#,
        );
        assert!(matches!(result, Err(LevelError::Config(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = LevelSet::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(LevelError::ParseError(_))));
    }
}
