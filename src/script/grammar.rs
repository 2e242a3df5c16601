//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::engine::CancelMode;
use crate::geometry::Point;
use crate::script::ast::*;
use crate::script::lexer::Token;

/// Parse replay script source into an AST
pub fn parse(input: &str) -> Result<Script, Vec<crate::ScriptError>> {
    let bad_input = crate::script::lexer::unrecognized(input);
    if !bad_input.is_empty() {
        return Err(bad_input
            .into_iter()
            .map(|span| crate::ScriptError::Syntax {
                message: format!("Unrecognized input '{}'", &input[span.clone()]),
                span,
                expected: Vec::new(),
            })
            .collect());
    }

    let len = input.len();

    let token_iter = crate::script::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    script_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn script_parser<'a, I>() -> impl Parser<'a, I, Script, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    // Numbers (including negative via Minus token)
    let number = just(Token::Minus)
        .or_not()
        .then(select! { Token::Number(n) => n })
        .map(|(neg, n)| if neg.is_some() { -n } else { n })
        .labelled("number")
        .try_map(|n, span| {
            if n.is_finite() {
                Ok(n)
            } else {
                Err(Rich::custom(span, "number is too large"))
            }
        });

    // `x, y` with an optional comma
    let point = number
        .clone()
        .then_ignore(just(Token::Comma).or_not())
        .then(number.clone())
        .map(|(x, y)| Point::new(x, y))
        .labelled("coordinates");

    let level_name = select! {
        Token::Ident(s) => s,
        Token::String(s) => s,
    }
    .labelled("level name");

    let duration = number.try_map(|ms, span| {
        if ms >= 0.0 {
            Ok(ms)
        } else {
            Err(Rich::custom(span, "wait duration cannot be negative"))
        }
    });

    let cancel_mode = select! {
        Token::Snap => CancelMode::SnapToEnd,
        Token::Freeze => CancelMode::Freeze,
    }
    .labelled("cancel mode");

    let command = choice((
        just(Token::Level).ignore_then(level_name).map(Command::Level),
        just(Token::Reset).to(Command::Reset),
        just(Token::Down).ignore_then(point.clone()).map(Command::Down),
        just(Token::Move).ignore_then(point.clone()).map(Command::Move),
        just(Token::Click).ignore_then(point).map(Command::Click),
        just(Token::Wait).ignore_then(duration).map(Command::Wait),
        just(Token::Cancel)
            .ignore_then(cancel_mode.or_not())
            .map(|mode| Command::Cancel(mode.unwrap_or(CancelMode::SnapToEnd))),
    ))
    .map_with(|c, e| Spanned::new(c, span_range(&e.span())));

    command
        .repeated()
        .collect()
        .then_ignore(end())
        .map(|commands| Script { commands })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptError;

    fn commands(source: &str) -> Vec<Command> {
        parse(source)
            .expect("Should parse")
            .commands
            .into_iter()
            .map(|c| c.node)
            .collect()
    }

    #[test]
    fn test_parse_empty_script() {
        assert_eq!(parse("").expect("Should parse"), Script::default());
        assert_eq!(parse("// nothing\n").expect("Should parse"), Script::default());
    }

    #[test]
    fn test_parse_pointer_commands() {
        assert_eq!(
            commands("down 250, 150 move 250 250 click -5, 0.5"),
            vec![
                Command::Down(Point::new(250.0, 150.0)),
                Command::Move(Point::new(250.0, 250.0)),
                Command::Click(Point::new(-5.0, 0.5)),
            ]
        );
    }

    #[test]
    fn test_parse_level_names() {
        assert_eq!(
            commands(r#"level leftRight level "my level" reset"#),
            vec![
                Command::Level("leftRight".to_string()),
                Command::Level("my level".to_string()),
                Command::Reset,
            ]
        );
    }

    #[test]
    fn test_parse_wait_and_cancel() {
        assert_eq!(
            commands("wait 120 cancel cancel snap cancel freeze"),
            vec![
                Command::Wait(120.0),
                Command::Cancel(CancelMode::SnapToEnd),
                Command::Cancel(CancelMode::SnapToEnd),
                Command::Cancel(CancelMode::Freeze),
            ]
        );
    }

    #[test]
    fn test_command_spans() {
        let script = parse("reset\nclick 1, 2").expect("Should parse");
        assert_eq!(script.commands[0].span, 0..5);
        assert_eq!(script.commands[1].span, 6..16);
    }

    #[test]
    fn test_negative_wait_is_rejected() {
        let errors = parse("wait -5").unwrap_err();
        assert_eq!(errors.len(), 1);
        match &errors[0] {
            ScriptError::Syntax { message, span, .. } => {
                assert!(message.contains("negative"), "message: {}", message);
                assert_eq!(span.start, 5);
            }
        }
    }

    #[test]
    fn test_missing_coordinate_reports_expected() {
        let errors = parse("down 10").unwrap_err();
        match &errors[0] {
            ScriptError::Syntax { message, .. } => {
                assert!(message.contains("end of input"), "message: {}", message);
            }
        }
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(parse("jump 1 2").is_err());
    }

    #[test]
    fn test_overflowing_number_is_rejected() {
        let source = format!("wait {}", "9".repeat(400));
        let errors = parse(&source).unwrap_err();
        assert_eq!(errors.len(), 1);
        match &errors[0] {
            ScriptError::Syntax { message, span, .. } => {
                assert!(message.contains("too large"), "message: {}", message);
                assert_eq!(*span, 5..source.len());
            }
        }

        let source = format!("click -{}, 0", "9".repeat(400));
        assert!(parse(&source).is_err());
    }

    #[test]
    fn test_unrecognized_characters_are_reported() {
        let source = "click 250, 150 @@@ # move 250 250";
        let errors = parse(source).unwrap_err();
        assert_eq!(errors.len(), 2);
        match &errors[0] {
            ScriptError::Syntax {
                message,
                span,
                expected,
            } => {
                assert_eq!(message, "Unrecognized input '@@@'");
                assert_eq!(*span, 15..18);
                assert!(expected.is_empty());
            }
        }
        match &errors[1] {
            ScriptError::Syntax { span, .. } => assert_eq!(&source[span.clone()], "#"),
        }
    }
}
