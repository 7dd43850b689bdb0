//! Numeric evaluation of parse trees.

use crate::{
    error::InternalError,
    syntax::{Fold, ParseTree},
};

/// Evaluate the tree as a floating-point number.
///
/// Division by zero is not an error; it follows IEEE-754 and produces an
/// infinity or NaN.
pub fn evaluate(tree: &ParseTree<'_>) -> Result<f64, InternalError> {
    tree.fold(&mut Evaluator)
}

/// Chains are right-recursive, so each `Sub`/`Div` link turns its own operand
/// into the additive/multiplicative inverse before combining it with the value
/// of the rest of the chain. This keeps `8 / 2 / 2` equal to `(8 / 2) / 2`.
#[derive(Debug, Default)]
pub struct Evaluator;

impl<'source> Fold<'source> for Evaluator {
    type Output = f64;

    fn number(&mut self, literal: &'source str) -> Result<f64, InternalError> {
        literal
            .parse()
            .map_err(|_| InternalError::InvalidLiteral(literal.to_owned()))
    }

    fn negation(&mut self, child: f64) -> f64 {
        -child
    }

    fn group(&mut self, child: f64) -> f64 {
        child
    }

    fn mul(&mut self, factor: f64, rest: f64) -> f64 {
        factor * rest
    }

    fn div(&mut self, factor: f64, rest: f64) -> f64 {
        1.0 / factor * rest
    }

    fn epsilon_mul(&mut self) -> f64 {
        1.0
    }

    fn add(&mut self, term: f64, rest: f64) -> f64 {
        term + rest
    }

    fn sub(&mut self, term: f64, rest: f64) -> f64 {
        -term + rest
    }

    fn epsilon_add(&mut self) -> f64 {
        0.0
    }

    fn term(&mut self, factor: f64, rest: f64) -> f64 {
        factor * rest
    }

    fn expression(&mut self, term: f64, rest: f64) -> f64 {
        term + rest
    }
}
