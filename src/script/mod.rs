//! Parser for replay scripts
//!
//! A replay script is a list of pointer and timing commands that drive the
//! engine without a browser:
//!
//! ```text
//! level leftRight
//! click 100, 250     // arm the top-left corner
//! move 100, 350
//! down 100, 350      // commit a quarter turn
//! wait 600
//! ```

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::parse;
