//! Lexer for replay scripts using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Command keywords
    #[token("level")]
    Level,
    #[token("reset")]
    Reset,
    #[token("down")]
    Down,
    #[token("move")]
    Move,
    #[token("click")]
    Click,
    #[token("wait")]
    Wait,
    #[token("cancel")]
    Cancel,

    // Cancel modes
    #[token("snap")]
    Snap,
    #[token("freeze")]
    Freeze,

    #[token("-")]
    Minus,
    #[token(",")]
    Comma,

    // Literals - identifiers must come after keywords
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    String(String),

    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Comments (skip)
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    BlockComment,
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

/// Spans of input no token matches. Neighbouring bad bytes form one span.
pub fn unrecognized(input: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for (tok, span) in Token::lexer(input).spanned() {
        if tok.is_ok() {
            continue;
        }
        match spans.last_mut() {
            Some(last) if last.end == span.start => last.end = span.end,
            _ => spans.push(span),
        }
    }
    spans
}
