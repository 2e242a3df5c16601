//! Error types for replay script parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::script::lexer::Token;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl ScriptError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ScriptError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
            }
        }
        String::from_utf8(buf).unwrap()
    }
}

impl<'a> From<chumsky::error::Rich<'a, Token>> for ScriptError {
    fn from(err: chumsky::error::Rich<'a, Token>) -> Self {
        use chumsky::error::{RichPattern, RichReason};

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => match found {
                Some(tok) => format!("Unexpected {}", format_token(tok)),
                None => "Unexpected end of input".to_string(),
            },
            RichReason::Custom(msg) => msg.to_string(),
        };

        let mut expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                RichPattern::Token(tok) => Some(format_token(tok)),
                RichPattern::Label(label) => Some(label.to_string()),
                RichPattern::EndOfInput => Some("end of input".to_string()),
                RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                RichPattern::Any => Some("any token".to_string()),
                RichPattern::SomethingElse => None,
            })
            .collect();
        expected.sort();
        expected.dedup();

        ScriptError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &Token) -> String {
    match tok {
        Token::Ident(s) => format!("identifier '{}'", s),
        Token::String(s) => format!("string \"{}\"", s),
        Token::Number(n) => format!("number {}", n),
        Token::Minus => "'-'".to_string(),
        Token::Comma => "','".to_string(),
        Token::Level => "keyword 'level'".to_string(),
        Token::Reset => "keyword 'reset'".to_string(),
        Token::Down => "keyword 'down'".to_string(),
        Token::Move => "keyword 'move'".to_string(),
        Token::Click => "keyword 'click'".to_string(),
        Token::Wait => "keyword 'wait'".to_string(),
        Token::Cancel => "keyword 'cancel'".to_string(),
        Token::Snap => "keyword 'snap'".to_string(),
        Token::Freeze => "keyword 'freeze'".to_string(),
        Token::LineComment | Token::BlockComment => "comment".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_includes_source_context() {
        let source = "wait 10\nclick 5";
        let errors = crate::script::parse(source).unwrap_err();
        let report = errors[0].format(source, "moves.replay");
        assert!(report.contains("moves.replay"));
        assert!(report.contains("click 5"));
    }

    #[test]
    fn test_unexpected_token_message() {
        let errors = crate::script::parse("level 42").unwrap_err();
        match &errors[0] {
            ScriptError::Syntax {
                message, expected, ..
            } => {
                assert_eq!(message, "Unexpected number 42");
                assert!(expected.iter().any(|e| e == "level name"), "{:?}", expected);
            }
        }
    }
}
