//! The whole pipeline: lexer, parser and one back end.

use crate::{
    error::Error,
    eval::evaluate,
    lexer::lex,
    parser::{parse, parse_all},
    postfix::to_postfix,
    source::to_source,
};
use std::fmt;

/// The back end selected for a compilation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// Compute the numeric value of the expression.
    Evaluate,
    /// Emit the expression in postfix notation.
    #[default]
    Postfix,
    /// Emit the expression as normalized infix source.
    Source,
}

/// The result of a compilation.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Number(f64),
    Text(String),
}

impl Output {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(..) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(..) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Configuration of a compilation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    mode: Mode,
    strict: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the back end.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Reject inputs whose tokens are not all consumed by the expression.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Compile the input with the specified back end.
///
/// Tokens after a complete expression are ignored, as [`parse`] does.
pub fn compile(input: &str, mode: Mode) -> Result<Output, Error> {
    compile_with(input, &Options::new().mode(mode))
}

/// Compile the input with the given [`Options`].
///
/// With [`Options::strict`] set, the tokens are parsed with [`parse_all`]
/// instead of [`parse`], so tokens left after the expression are an error.
pub fn compile_with(input: &str, options: &Options) -> Result<Output, Error> {
    let span = tracing::debug_span!("compile", mode = ?options.mode);
    let _entered = span.enter();

    let tokens = lex(input)?;
    tracing::debug!("lexed {} token(s)", tokens.len());

    let tree = if options.strict {
        parse_all(&tokens)?
    } else {
        parse(&tokens)?
    };
    tracing::trace!("parse tree: {}", tree);

    let output = match options.mode {
        Mode::Evaluate => Output::Number(evaluate(&tree)?),
        Mode::Postfix => Output::Text(to_postfix(&tree)?),
        Mode::Source => Output::Text(to_source(&tree)?),
    };
    tracing::debug!("output: {}", output);

    Ok(output)
}
