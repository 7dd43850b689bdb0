//! Infix source regeneration.

use crate::{
    error::InternalError,
    syntax::{Fold, ParseTree},
};

/// Render the tree back to normalized infix source.
///
/// Binary operators are surrounded by single spaces, unary minus is attached
/// to its operand, and every group keeps its parentheses. For any input in
/// that form, `to_source(parse(lex(s))) == s`.
pub fn to_source(tree: &ParseTree<'_>) -> Result<String, InternalError> {
    tree.fold(&mut Source)
}

#[derive(Debug, Default)]
pub struct Source;

impl<'source> Fold<'source> for Source {
    type Output = String;

    fn number(&mut self, literal: &'source str) -> Result<String, InternalError> {
        Ok(literal.to_owned())
    }

    fn negation(&mut self, child: String) -> String {
        format!("-{}", child)
    }

    fn group(&mut self, child: String) -> String {
        format!("({})", child)
    }

    fn mul(&mut self, factor: String, rest: String) -> String {
        format!(" * {}{}", factor, rest)
    }

    fn div(&mut self, factor: String, rest: String) -> String {
        format!(" / {}{}", factor, rest)
    }

    fn epsilon_mul(&mut self) -> String {
        String::new()
    }

    fn add(&mut self, term: String, rest: String) -> String {
        format!(" + {}{}", term, rest)
    }

    fn sub(&mut self, term: String, rest: String) -> String {
        format!(" - {}{}", term, rest)
    }

    fn epsilon_add(&mut self) -> String {
        String::new()
    }

    fn term(&mut self, factor: String, rest: String) -> String {
        factor + &rest
    }

    fn expression(&mut self, term: String, rest: String) -> String {
        term + &rest
    }
}
