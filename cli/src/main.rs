//! Command-line driver for Ibex.
//!
//! The driver owns everything the core deliberately does not: argument
//! handling, file reading, diagnostic rendering and exit-code mapping. It
//! runs the three pipeline stages strictly in sequence and stops at the
//! first stage that reported errors.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use miette::{IntoDiagnostic, WrapErr};
use tracing_subscriber::EnvFilter;

use ibex_core::evaluator::Interpreter;
use ibex_core::lexer::Lexer;
use ibex_core::parser::Parser;
use ibex_core::token::TokenKind;

/// Ibex - a small imperative scripting language
#[derive(ClapParser, Debug)]
#[command(name = "ibex", about = "Run Ibex scripts", version)]
struct Args {
    /// Script to run
    script: PathBuf,

    /// Print the token stream (for debugging)
    #[arg(long)]
    debug_tokens: bool,

    /// Print the parsed statement list (for debugging)
    #[arg(long)]
    debug_parse: bool,
}

fn main() -> miette::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("IBEX_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let source = fs::read_to_string(&args.script)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", args.script.display()))?;

    let filename = args.script.display().to_string();
    let mut lexer = Lexer::new(filename.as_str(), source.as_str());

    if args.debug_tokens {
        let mut depth = 0;
        loop {
            let token = lexer.peek_token(depth);
            println!("{token:?}");
            if token.kind == TokenKind::EndOfFile {
                break;
            }
            depth += 1;
        }
    }

    if lexer.errors_reported() > 0 {
        for error in lexer.errors() {
            eprintln!("Error: {error}.");
        }
        eprintln!("Reported {} error(s). Exiting...", lexer.errors_reported());
        return Ok(ExitCode::from(2));
    }

    let mut parser = Parser::new(&mut lexer);
    let program = parser.parse();

    if args.debug_parse {
        println!("{program:#?}");
    }

    if parser.errors_reported() > 0 {
        for error in parser.errors() {
            eprintln!("Error: {error}.");
        }
        eprintln!("Reported {} error(s). Exiting...", parser.errors_reported());
        return Ok(ExitCode::from(3));
    }

    if let Err(error) = Interpreter::new(&program).interpret() {
        eprintln!("Error: {error}.");
        return Ok(ExitCode::from(4));
    }
    Ok(ExitCode::SUCCESS)
}
