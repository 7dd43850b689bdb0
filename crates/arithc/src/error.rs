//! Error types.

use crate::parser::Rule;

/// The error type returned from [`compile`](crate::compile()).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("lexer error: {}", _0)]
    Lex(#[from] LexError),

    #[error("parse error: {}", _0)]
    Parse(#[from] ParseError),

    #[error("internal error: {}", _0)]
    Internal(#[from] InternalError),
}

/// The input contains a character sequence that no token matches.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unrecognized input at offset {offset}: `{remaining}'")]
pub struct LexError {
    offset: usize,
    remaining: String,
}

impl LexError {
    pub(crate) fn new(offset: usize, remaining: &str) -> Self {
        Self {
            offset,
            remaining: remaining.to_owned(),
        }
    }

    /// The byte offset in the input where lexing stopped.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unconsumed input, starting at the offending character.
    pub fn remaining(&self) -> &str {
        &self.remaining
    }
}

/// The token sequence does not match the grammar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token `{found}' at position {position} while parsing {rule}")]
    UnexpectedToken {
        rule: Rule,
        position: usize,
        found: String,
    },

    #[error("unexpected end of input while parsing {rule}")]
    UnexpectedEoi { rule: Rule },

    #[error("unconsumed token `{found}' at position {position}")]
    TrailingTokens { position: usize, found: String },
}

impl ParseError {
    /// The grammar rule that was being attempted, if any.
    pub fn rule(&self) -> Option<Rule> {
        match self {
            Self::UnexpectedToken { rule, .. } | Self::UnexpectedEoi { rule } => Some(*rule),
            Self::TrailingTokens { .. } => None,
        }
    }
}

/// A back end met a tree it cannot handle.
///
/// The parser never builds such trees, so this always indicates a bug or a
/// hand-assembled tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InternalError {
    #[error("unexpected {found} node in {context}")]
    UnexpectedNode { context: Rule, found: &'static str },

    #[error("invalid numeric literal `{}'", _0)]
    InvalidLiteral(String),
}
