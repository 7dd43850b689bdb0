//! Predictive recursive-descent parser.
//!
//! ```text
//! Expression -> Term AddChain
//! AddChain   -> ('+' | '-') Term AddChain | ε
//! Term       -> Factor MulChain
//! MulChain   -> ('*' | '/') Factor MulChain | ε
//! Factor     -> NUM | '(' Expression ')' | '-' Factor
//! ```
//!
//! Every rule is a function taking a [`Tokens`] view and returning the built
//! subtree together with the view of the tokens it left unconsumed.

use crate::{error::ParseError, lexer::Token, syntax::ParseTree};
use std::fmt;

/// The grammar rules, used to report where parsing failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    Expression,
    AddChain,
    Term,
    MulChain,
    Factor,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Expression => "Expression",
            Self::AddChain => "AddChain",
            Self::Term => "Term",
            Self::MulChain => "MulChain",
            Self::Factor => "Factor",
        })
    }
}

/// An immutable view of the not-yet-consumed tokens.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tokens<'t, 'source> {
    tokens: &'t [Token<'source>],
    position: usize,
}

impl<'t, 'source> Tokens<'t, 'source> {
    pub fn new(tokens: &'t [Token<'source>]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// The index of the first remaining token within the whole sequence.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &'t [Token<'source>] {
        self.tokens
    }

    pub fn first(&self) -> Option<&'t Token<'source>> {
        self.tokens.first()
    }

    /// Return the view with the first token removed.
    #[must_use]
    pub fn advance(self) -> Self {
        match self.tokens.split_first() {
            Some((_, rest)) => Self {
                tokens: rest,
                position: self.position + 1,
            },
            None => self,
        }
    }

    fn unexpected(&self, rule: Rule) -> ParseError {
        let err = match self.first() {
            Some(token) => ParseError::UnexpectedToken {
                rule,
                position: self.position,
                found: token.to_string(),
            },
            None => ParseError::UnexpectedEoi { rule },
        };
        tracing::trace!("{}", err);
        err
    }
}

/// The result of a single grammar rule.
pub type Parsed<'t, 'source> = Result<(ParseTree<'source>, Tokens<'t, 'source>), ParseError>;

/// Parse a token sequence into a [`ParseTree`].
///
/// Tokens left over after a complete expression are ignored; use
/// [`parse_all`] to reject them.
pub fn parse<'source>(tokens: &[Token<'source>]) -> Result<ParseTree<'source>, ParseError> {
    let span = tracing::trace_span!("parse");
    let _entered = span.enter();

    let (tree, rest) = parse_expression(Tokens::new(tokens))?;
    if let Some(token) = rest.first() {
        tracing::warn!(
            "ignoring {} unconsumed token(s) starting with `{}' at position {}",
            rest.len(),
            token,
            rest.position()
        );
    }
    Ok(tree)
}

/// Parse a token sequence, failing if any token is left unconsumed.
pub fn parse_all<'source>(tokens: &[Token<'source>]) -> Result<ParseTree<'source>, ParseError> {
    let span = tracing::trace_span!("parse_all");
    let _entered = span.enter();

    let (tree, rest) = parse_expression(Tokens::new(tokens))?;
    match rest.first() {
        Some(token) => Err(ParseError::TrailingTokens {
            position: rest.position(),
            found: token.to_string(),
        }),
        None => Ok(tree),
    }
}

/// `Expression -> Term AddChain`
pub fn parse_expression<'t, 'source>(tokens: Tokens<'t, 'source>) -> Parsed<'t, 'source> {
    let (term, tokens) = parse_term(tokens)?;
    let (rest, tokens) = parse_add_chain(tokens)?;
    tracing::trace!("reduce: Expression -> Term AddChain");
    Ok((ParseTree::expression(term, rest), tokens))
}

/// `AddChain -> ('+' | '-') Term AddChain | ε`
pub fn parse_add_chain<'t, 'source>(tokens: Tokens<'t, 'source>) -> Parsed<'t, 'source> {
    let op = match tokens.first() {
        Some(op @ (Token::Plus | Token::Minus)) => *op,
        _ => {
            tracing::trace!("reduce: AddChain -> ε");
            return Ok((ParseTree::EpsilonAdd, tokens));
        }
    };

    let (term, tokens) = parse_term(tokens.advance())?;
    let (rest, tokens) = parse_add_chain(tokens)?;
    let tree = match op {
        Token::Plus => {
            tracing::trace!("reduce: AddChain -> `+' Term AddChain");
            ParseTree::add(term, rest)
        }
        _ => {
            tracing::trace!("reduce: AddChain -> `-' Term AddChain");
            ParseTree::sub(term, rest)
        }
    };
    Ok((tree, tokens))
}

/// `Term -> Factor MulChain`
pub fn parse_term<'t, 'source>(tokens: Tokens<'t, 'source>) -> Parsed<'t, 'source> {
    let (factor, tokens) = parse_factor(tokens)?;
    let (rest, tokens) = parse_mul_chain(tokens)?;
    tracing::trace!("reduce: Term -> Factor MulChain");
    Ok((ParseTree::term(factor, rest), tokens))
}

/// `MulChain -> ('*' | '/') Factor MulChain | ε`
pub fn parse_mul_chain<'t, 'source>(tokens: Tokens<'t, 'source>) -> Parsed<'t, 'source> {
    let op = match tokens.first() {
        Some(op @ (Token::Star | Token::Slash)) => *op,
        _ => {
            tracing::trace!("reduce: MulChain -> ε");
            return Ok((ParseTree::EpsilonMul, tokens));
        }
    };

    let (factor, tokens) = parse_factor(tokens.advance())?;
    let (rest, tokens) = parse_mul_chain(tokens)?;
    let tree = match op {
        Token::Star => {
            tracing::trace!("reduce: MulChain -> `*' Factor MulChain");
            ParseTree::mul(factor, rest)
        }
        _ => {
            tracing::trace!("reduce: MulChain -> `/' Factor MulChain");
            ParseTree::div(factor, rest)
        }
    };
    Ok((tree, tokens))
}

/// `Factor -> NUM | '(' Expression ')' | '-' Factor`
pub fn parse_factor<'t, 'source>(tokens: Tokens<'t, 'source>) -> Parsed<'t, 'source> {
    match tokens.first() {
        Some(Token::Num(num)) => {
            tracing::trace!("reduce: Factor -> NUM");
            Ok((ParseTree::number(*num), tokens.advance()))
        }

        Some(Token::LParen) => {
            let (expr, tokens) = parse_expression(tokens.advance())?;
            match tokens.first() {
                Some(Token::RParen) => {
                    tracing::trace!("reduce: Factor -> `(' Expression `)'");
                    Ok((ParseTree::group(expr), tokens.advance()))
                }
                _ => Err(tokens.unexpected(Rule::Factor)),
            }
        }

        Some(Token::Minus) => {
            let (factor, tokens) = parse_factor(tokens.advance())?;
            tracing::trace!("reduce: Factor -> `-' Factor");
            Ok((ParseTree::negation(factor), tokens))
        }

        _ => Err(tokens.unexpected(Rule::Factor)),
    }
}
