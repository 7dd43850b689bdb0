//! Postfix (RPN) code generation.

use crate::{
    error::InternalError,
    syntax::{Fold, ParseTree},
};

/// Generate the space-separated postfix form of the tree.
///
/// Groups need no marker in postfix and are dropped; negation is emitted as
/// a multiplication by `-1`.
pub fn to_postfix(tree: &ParseTree<'_>) -> Result<String, InternalError> {
    tree.fold(&mut Postfix)
}

/// Every chain link renders with a leading space, so the only token without
/// one is the leftmost operand.
#[derive(Debug, Default)]
pub struct Postfix;

impl<'source> Fold<'source> for Postfix {
    type Output = String;

    fn number(&mut self, literal: &'source str) -> Result<String, InternalError> {
        Ok(literal.to_owned())
    }

    fn negation(&mut self, child: String) -> String {
        child + " -1 *"
    }

    fn group(&mut self, child: String) -> String {
        child
    }

    fn mul(&mut self, factor: String, rest: String) -> String {
        format!(" {} *{}", factor, rest)
    }

    fn div(&mut self, factor: String, rest: String) -> String {
        format!(" {} /{}", factor, rest)
    }

    fn epsilon_mul(&mut self) -> String {
        String::new()
    }

    fn add(&mut self, term: String, rest: String) -> String {
        format!(" {} +{}", term, rest)
    }

    fn sub(&mut self, term: String, rest: String) -> String {
        format!(" {} -{}", term, rest)
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
