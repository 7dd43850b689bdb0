use arithc::{
    compile, compile_with, evaluate, lex, parse, to_postfix, to_source, Error, InternalError,
    Mode, Options, Output, ParseError, ParseTree, Rule,
};
use tracing::Level;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .try_init();
}

macro_rules! define_tests {
    ($($name:ident: $input:expr => ($value:expr, $postfix:expr),)*) => {$(
        #[test]
        fn $name() -> anyhow::Result<()> {
            init_tracing();
            let tokens = lex($input)?;
            let tree = parse(&tokens)?;
            assert_eq!(evaluate(&tree)?, $value);
            assert_eq!(to_postfix(&tree)?, $postfix);
            Ok(())
        }
    )*};
}

define_tests! {
    addition: "1 + 2" => (3.0, "1 2 +"),
    subtraction: "3 - 5" => (-2.0, "3 5 -"),
    multiplication: "4 * 3" => (12.0, "4 3 *"),
    division: "3 / 4" => (0.75, "3 4 /"),
    mixed_multiplicative: "3 * 6 / 2 * 5" => (45.0, "3 6 * 2 / 5 *"),
    division_chain: "8 / 2 / 2" => (2.0, "8 2 / 2 /"),
    subtraction_chain: "20 - 5 - 3 - 2" => (10.0, "20 5 - 3 - 2 -"),
    negated_group: "-(2 + 4)" => (-6.0, "2 4 + -1 *"),
    precedence: "4 * 3 / 1 + 2 / 8" => (12.25, "4 3 * 1 / 2 8 / +"),
    full_example: "-9 * 2 / -(3 + 7) + ((-4 * 1/2) - -21)"
        => (20.8, "9 -1 * 2 * 3 7 + -1 * / 4 -1 * 1 * 2 / 21 -1 * - +"),
}

#[test]
fn roundtrip_full_example() -> anyhow::Result<()> {
    init_tracing();
    let input = "-9 * 2 / -(3 + 7) + ((-4 * 1 / 2) - -21)";
    let tokens = lex(input)?;
    assert_eq!(to_source(&parse(&tokens)?)?, input);
    Ok(())
}

#[test]
fn whitespace_normalization() -> anyhow::Result<()> {
    let output = compile("  4*     3   /1", Mode::Source)?;
    assert_eq!(output, Output::Text("4 * 3 / 1".into()));
    Ok(())
}

#[test]
fn empty_input() -> anyhow::Result<()> {
    assert!(lex("")?.is_empty());
    Ok(())
}

#[test]
fn lex_failure() {
    let err = lex("1 + ,2").unwrap_err();
    assert_eq!(err.remaining(), ",2");
    assert!(matches!(compile("1 + ,2", Mode::Postfix), Err(Error::Lex(..))));
}

#[test]
fn parse_failures() {
    for input in ["", "/45", "(1 + 2", "1 + * 2", "()"] {
        assert!(
            matches!(compile(input, Mode::Evaluate), Err(Error::Parse(..))),
            "expected a parse error for {:?}",
            input
        );
    }

    match compile("/45", Mode::Evaluate) {
        Err(Error::Parse(err)) => assert_eq!(err.rule(), Some(Rule::Factor)),
        other => panic!("unexpected result: {:?}", other),
    }
    match compile("1 + * 2", Mode::Evaluate) {
        Err(Error::Parse(err)) => assert_eq!(err.rule(), Some(Rule::Factor)),
        other => panic!("unexpected result: {:?}", other),
    }

    let options = Options::new().strict(true);
    match compile_with("1 2", &options) {
        Err(Error::Parse(err @ ParseError::TrailingTokens { .. })) => {
            assert_eq!(err.rule(), None)
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn strict_mode_rejects_trailing_tokens() {
    let options = Options::new().mode(Mode::Postfix).strict(true);
    assert!(matches!(compile_with("1 2", &options), Err(Error::Parse(..))));
    assert_eq!(
        compile("1 2", Mode::Postfix).unwrap(),
        Output::Text("1".into())
    );
}

#[test]
fn malformed_tree_is_an_internal_error() {
    // A `Mul` link where an additive chain is expected.
    let tree = ParseTree::expression(
        ParseTree::term(ParseTree::number("1"), ParseTree::EpsilonMul),
        ParseTree::mul(ParseTree::number("2"), ParseTree::EpsilonMul),
    );
    for result in [
        evaluate(&tree).map(|_| ()),
        to_postfix(&tree).map(|_| ()),
        to_source(&tree).map(|_| ()),
    ] {
        assert!(matches!(
            result,
            Err(InternalError::UnexpectedNode { found: "Mul", .. })
        ));
    }
}
