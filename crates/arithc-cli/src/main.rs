use anyhow::Context as _;
use arithc::{compile_with, util::display_tokens, Mode, Options};
use clap::{Parser, ValueEnum};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// What to print for the input expression.
    #[arg(long, value_enum, default_value_t = Emit::Postfix)]
    emit: Emit,

    /// Shorthand for `--emit eval`.
    #[arg(long, conflicts_with = "emit")]
    eval: bool,

    /// Fail if tokens remain after a complete expression.
    #[arg(long)]
    strict: bool,

    /// The expression to compile. Read from stdin if omitted.
    input: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, ValueEnum)]
enum Emit {
    Postfix,
    Eval,
    Source,
    Tokens,
    Tree,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!("parsed CLI args = {:?}", args);

    let input = match &args.input {
        Some(input) => input.clone(),
        None => io::read_to_string(io::stdin()).context("failed to read from stdin")?,
    };
    let emit = if args.eval { Emit::Eval } else { args.emit };

    match emit {
        Emit::Tokens => {
            let tokens = arithc::lex(&input).context("lexer error")?;
            println!("{}", display_tokens(&tokens));
        }
        Emit::Tree => {
            let tokens = arithc::lex(&input).context("lexer error")?;
            let tree = if args.strict {
                arithc::parse_all(&tokens)
            } else {
                arithc::parse(&tokens)
            }
            .context("parse error")?;
            println!("{}", tree);
        }
        Emit::Postfix | Emit::Eval | Emit::Source => {
            let mode = match emit {
                Emit::Eval => Mode::Evaluate,
                Emit::Source => Mode::Source,
                _ => Mode::Postfix,
            };
            let options = Options::new().mode(mode).strict(args.strict);
            let output = compile_with(&input, &options)
                .with_context(|| anyhow::anyhow!("failed to compile `{}'", input.trim()))?;
            println!("{}", output);
        }
    }

    Ok(())
}
