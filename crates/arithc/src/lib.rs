//! A small compiler for integer arithmetic expressions.
//!
//! The pipeline is `lexer` -> `parser` -> one of the back ends
//! (`eval`, `postfix`, `source`), composed by [`compile`].

pub mod compile;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod postfix;
pub mod source;
pub mod syntax;
pub mod util;

pub use crate::{
    compile::{compile, compile_with, Mode, Options, Output},
    error::{Error, InternalError, LexError, ParseError},
    eval::evaluate,
    lexer::{lex, Token},
    parser::{parse, parse_all, Rule},
    postfix::to_postfix,
    source::to_source,
    syntax::ParseTree,
};
