//! Syntax tree for replay scripts

use crate::engine::CancelMode;
use crate::geometry::Point;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A complete replay script
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    pub commands: Vec<Spanned<Command>>,
}

/// One scripted step, executed at the current virtual time
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `level <name>`: restart on a named level
    Level(String),
    /// `reset`: restart the current level
    Reset,
    /// `down x, y`: pointer press
    Down(Point),
    /// `move x, y`: pointer motion
    Move(Point),
    /// `click x, y`: motion to the point followed by a press
    Click(Point),
    /// `wait ms`: let virtual time pass, ticking frames as needed
    Wait(f64),
    /// `cancel [snap|freeze]`: stop a running rotation
    Cancel(CancelMode),
}

impl Command {
    /// Keyword that introduces the command
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Level(_) => "level",
            Command::Reset => "reset",
            Command::Down(_) => "down",
            Command::Move(_) => "move",
            Command::Click(_) => "click",
            Command::Wait(_) => "wait",
            Command::Cancel(_) => "cancel",
        }
    }
}
