//! Lexer implementation.

use crate::error::LexError;
use logos::Logos;
use std::fmt;

/// The lexical units of an arithmetic expression.
#[derive(Debug, Copy, Clone, Logos, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum Token<'source> {
    #[regex(r"[0-9]+")]
    Num(&'source str),

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(digits) => f.write_str(digits),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
        }
    }
}

/// Split the input string into a sequence of tokens.
///
/// Whitespace is discarded. `-` is always lexed as [`Token::Minus`]; whether
/// it negates or subtracts is decided by the parser.
pub fn lex(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    let span = tracing::trace_span!("lex");
    let _entered = span.enter();

    let mut lexer = Token::lexer(input);
    let mut tokens = vec![];
    while let Some(res) = lexer.next() {
        match res {
            Ok(token) => {
                tracing::trace!("token {:?} at {:?}", token, lexer.span());
                tokens.push(token);
            }
            Err(()) => {
                let offset = lexer.span().start;
                return Err(LexError::new(offset, &input[offset..]));
            }
        }
    }
    Ok(tokens)
}
