//! Syntax definition.

use crate::{error::InternalError, parser::Rule};
use std::fmt;

/// The grammar-shaped tree produced by the parser.
///
/// Same-precedence operator sequences are stored as right-recursive chains
/// (`Add`/`Sub` terminated by `EpsilonAdd`, `Mul`/`Div` terminated by
/// `EpsilonMul`). The back ends compensate for this shape in their folds, so
/// the tree is never re-associated.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseTree<'source> {
    /// The literal text of an integer.
    Number(&'source str),
    Negation(Box<Self>),
    /// A parenthesized expression.
    Group(Box<Self>),
    Mul {
        factor: Box<Self>,
        rest: Box<Self>,
    },
    Div {
        factor: Box<Self>,
        rest: Box<Self>,
    },
    EpsilonMul,
    Add {
        term: Box<Self>,
        rest: Box<Self>,
    },
    Sub {
        term: Box<Self>,
        rest: Box<Self>,
    },
    EpsilonAdd,
    Term {
        factor: Box<Self>,
        rest: Box<Self>,
    },
    Expression {
        term: Box<Self>,
        rest: Box<Self>,
    },
}

impl<'source> ParseTree<'source> {
    pub fn number(literal: &'source str) -> Self {
        Self::Number(literal)
    }

    pub fn negation(child: Self) -> Self {
        Self::Negation(Box::new(child))
    }

    pub fn group(child: Self) -> Self {
        Self::Group(Box::new(child))
    }

    pub fn mul(factor: Self, rest: Self) -> Self {
        Self::Mul {
            factor: Box::new(factor),
            rest: Box::new(rest),
        }
    }

    pub fn div(factor: Self, rest: Self) -> Self {
        Self::Div {
            factor: Box::new(factor),
            rest: Box::new(rest),
        }
    }

    pub fn add(term: Self, rest: Self) -> Self {
        Self::Add {
            term: Box::new(term),
            rest: Box::new(rest),
        }
    }

    pub fn sub(term: Self, rest: Self) -> Self {
        Self::Sub {
            term: Box::new(term),
            rest: Box::new(rest),
        }
    }

    pub fn term(factor: Self, rest: Self) -> Self {
        Self::Term {
            factor: Box::new(factor),
            rest: Box::new(rest),
        }
    }

    pub fn expression(term: Self, rest: Self) -> Self {
        Self::Expression {
            term: Box::new(term),
            rest: Box::new(rest),
        }
    }

    /// The name of this node's variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(..) => "Number",
            Self::Negation(..) => "Negation",
            Self::Group(..) => "Group",
            Self::Mul { .. } => "Mul",
            Self::Div { .. } => "Div",
            Self::EpsilonMul => "EpsilonMul",
            Self::Add { .. } => "Add",
            Self::Sub { .. } => "Sub",
            Self::EpsilonAdd => "EpsilonAdd",
            Self::Term { .. } => "Term",
            Self::Expression { .. } => "Expression",
        }
    }

    /// Reduce the tree to a single value, bottom-up.
    ///
    /// The root must be an `Expression`, and every child must belong to the
    /// family its grammar position allows. Otherwise an
    /// [`InternalError::UnexpectedNode`] is returned.
    ///
    /// Recursion depth follows the nesting depth of the tree.
    pub fn fold<F>(&self, f: &mut F) -> Result<F::Output, InternalError>
    where
        F: Fold<'source>,
    {
        self.fold_expression(f)
    }

    fn fold_expression<F>(&self, f: &mut F) -> Result<F::Output, InternalError>
    where
        F: Fold<'source>,
    {
        match self {
            Self::Expression { term, rest } => {
                let term = term.fold_term(f)?;
                let rest = rest.fold_add_chain(f)?;
                Ok(f.expression(term, rest))
            }
            _ => Err(self.unexpected(Rule::Expression)),
        }
    }

    fn fold_add_chain<F>(&self, f: &mut F) -> Result<F::Output, InternalError>
    where
        F: Fold<'source>,
    {
        match self {
            Self::Add { term, rest } => {
                let term = term.fold_term(f)?;
                let rest = rest.fold_add_chain(f)?;
                Ok(f.add(term, rest))
            }
            Self::Sub { term, rest } => {
                let term = term.fold_term(f)?;
                let rest = rest.fold_add_chain(f)?;
                Ok(f.sub(term, rest))
            }
            Self::EpsilonAdd => Ok(f.epsilon_add()),
            _ => Err(self.unexpected(Rule::AddChain)),
        }
    }

    fn fold_term<F>(&self, f: &mut F) -> Result<F::Output, InternalError>
    where
        F: Fold<'source>,
    {
        match self {
            Self::Term { factor, rest } => {
                let factor = factor.fold_factor(f)?;
                let rest = rest.fold_mul_chain(f)?;
                Ok(f.term(factor, rest))
            }
            _ => Err(self.unexpected(Rule::Term)),
        }
    }

    fn fold_mul_chain<F>(&self, f: &mut F) -> Result<F::Output, InternalError>
    where
        F: Fold<'source>,
    {
        match self {
            Self::Mul { factor, rest } => {
                let factor = factor.fold_factor(f)?;
                let rest = rest.fold_mul_chain(f)?;
                Ok(f.mul(factor, rest))
            }
            Self::Div { factor, rest } => {
                let factor = factor.fold_factor(f)?;
                let rest = rest.fold_mul_chain(f)?;
                Ok(f.div(factor, rest))
            }
            Self::EpsilonMul => Ok(f.epsilon_mul()),
            _ => Err(self.unexpected(Rule::MulChain)),
        }
    }

    fn fold_factor<F>(&self, f: &mut F) -> Result<F::Output, InternalError>
    where
        F: Fold<'source>,
    {
        match self {
            Self::Number(literal) => f.number(*literal),
            Self::Negation(child) => {
                let child = child.fold_factor(f)?;
                Ok(f.negation(child))
            }
            Self::Group(child) => {
                let child = child.fold_expression(f)?;
                Ok(f.group(child))
            }
            _ => Err(self.unexpected(Rule::Factor)),
        }
    }

    fn unexpected(&self, context: Rule) -> InternalError {
        tracing::error!("unexpected {} node in {}", self.kind(), context);
        InternalError::UnexpectedNode {
            context,
            found: self.kind(),
        }
    }
}

/// A catamorphism over [`ParseTree`], one method per variant.
///
/// Children are folded before their parent, so every method receives the
/// already-reduced values of its subtrees.
pub trait Fold<'source> {
    type Output;

    fn number(&mut self, literal: &'source str) -> Result<Self::Output, InternalError>;
    fn negation(&mut self, child: Self::Output) -> Self::Output;
    fn group(&mut self, child: Self::Output) -> Self::Output;
    fn mul(&mut self, factor: Self::Output, rest: Self::Output) -> Self::Output;
    fn div(&mut self, factor: Self::Output, rest: Self::Output) -> Self::Output;
    fn epsilon_mul(&mut self) -> Self::Output;
    fn add(&mut self, term: Self::Output, rest: Self::Output) -> Self::Output;
    fn sub(&mut self, term: Self::Output, rest: Self::Output) -> Self::Output;
    fn epsilon_add(&mut self) -> Self::Output;
    fn term(&mut self, factor: Self::Output, rest: Self::Output) -> Self::Output;
    fn expression(&mut self, term: Self::Output, rest: Self::Output) -> Self::Output;
}

impl fmt::Display for ParseTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Negation(child) => write!(f, "(neg {})", child),
            Self::Group(child) => write!(f, "(group {})", child),
            Self::Mul { factor, rest } => write!(f, "(* {} {})", factor, rest),
            Self::Div { factor, rest } => write!(f, "(/ {} {})", factor, rest),
            Self::Add { term, rest } => write!(f, "(+ {} {})", term, rest),
            Self::Sub { term, rest } => write!(f, "(- {} {})", term, rest),
            Self::EpsilonMul | Self::EpsilonAdd => f.write_str("ε"),
            Self::Term { factor, rest } => write!(f, "(term {} {})", factor, rest),
            Self::Expression { term, rest } => write!(f, "(expr {} {})", term, rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ParseTree as PT;

    /// Collects the variant names in fold order.
    struct Trace(Vec<&'static str>);

    impl<'source> Fold<'source> for Trace {
        type Output = ();

        fn number(&mut self, _: &'source str) -> Result<(), InternalError> {
            self.0.push("Number");
            Ok(())
        }
        fn negation(&mut self, _: ()) {
            self.0.push("Negation");
        }
        fn group(&mut self, _: ()) {
            self.0.push("Group");
        }
        fn mul(&mut self, _: (), _: ()) {
            self.0.push("Mul");
        }
        fn div(&mut self, _: (), _: ()) {
            self.0.push("Div");
        }
        fn epsilon_mul(&mut self) {
            self.0.push("EpsilonMul");
        }
        fn add(&mut self, _: (), _: ()) {
            self.0.push("Add");
        }
        fn sub(&mut self, _: (), _: ()) {
            self.0.push("Sub");
        }
        fn epsilon_add(&mut self) {
            self.0.push("EpsilonAdd");
        }
        fn term(&mut self, _: (), _: ()) {
            self.0.push("Term");
        }
        fn expression(&mut self, _: (), _: ()) {
            self.0.push("Expression");
        }
    }

    fn num_term(n: &str) -> ParseTree<'_> {
        PT::term(PT::number(n), PT::EpsilonMul)
    }

    #[test]
    fn fold_visits_children_first() {
        // 1 - -2
        let tree = PT::expression(
            num_term("1"),
            PT::sub(
                PT::term(PT::negation(PT::number("2")), PT::EpsilonMul),
                PT::EpsilonAdd,
            ),
        );
        let mut trace = Trace(vec![]);
        tree.fold(&mut trace).unwrap();
        assert_eq!(
            trace.0,
            [
                "Number",
                "EpsilonMul",
                "Term",
                "Number",
                "Negation",
                "EpsilonMul",
                "Term",
                "EpsilonAdd",
                "Sub",
                "Expression",
            ]
        );
    }

    #[test]
    fn root_must_be_expression() {
        let err = num_term("1").fold(&mut Trace(vec![])).unwrap_err();
        assert_eq!(
            err,
            InternalError::UnexpectedNode {
                context: Rule::Expression,
                found: "Term",
            }
        );
    }

    #[test]
    fn chain_families_are_not_interchangeable() {
        let tree = PT::expression(PT::term(PT::number("1"), PT::EpsilonAdd), PT::EpsilonAdd);
        let err = tree.fold(&mut Trace(vec![])).unwrap_err();
        assert_eq!(
            err,
            InternalError::UnexpectedNode {
                context: Rule::MulChain,
                found: "EpsilonAdd",
            }
        );
    }

    #[test]
    fn display_as_sexp() {
        let tree = PT::expression(
            PT::term(PT::group(PT::expression(num_term("2"), PT::EpsilonAdd)), PT::EpsilonMul),
            PT::add(num_term("3"), PT::EpsilonAdd),
        );
        assert_eq!(
            tree.to_string(),
            "(expr (term (group (expr (term 2 ε) ε)) ε) (+ (term 3 ε) ε))"
        );
    }
}
