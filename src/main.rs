// Copyright 2026 Martin Pool

//! `factorial`: print exact factorials of the numbers given on the command line.

mod console;
mod exit_code;
mod options;
mod outcome;

use std::io::{self, Write};
use std::process::{exit, ExitCode};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use tracing::debug;

use crate::exit_code::code_to_exit_code;
use crate::options::Options;
use crate::outcome::Outcome;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

/// Print exact factorials of the given numbers.
///
/// Results fit in 128 bits up to 34!; use `--big` for larger inputs.
#[derive(Parser, PartialEq, Debug)]
#[command(name = "factorial", author, about, allow_negative_numbers = true)]
struct Args {
    /// compute with arbitrary precision, so that there is no upper limit on N.
    #[arg(long, short = 'b', env = "FACTORIAL_BIG")]
    big: bool,

    /// generate autocompletions for the given shell.
    #[arg(long)]
    completions: Option<Shell>,

    /// print results as a JSON array.
    #[arg(long)]
    json: bool,

    /// log level for stderr (trace, debug, info, warn, error).
    #[arg(long, short = 'L', default_value = "warn", env = "FACTORIAL_TRACE_LEVEL")]
    level: tracing::Level,

    /// show version and quit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    version: bool,

    /// numbers whose factorials should be printed.
    #[arg(value_name = "N")]
    numbers: Vec<i64>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            eprintln!("{e}");
            exit(exit_code::USAGE);
        }
        // --help
        Err(e) => e.exit(),
    };
    match run(&args) {
        Ok(()) => code_to_exit_code(exit_code::SUCCESS),
        Err(err) => {
            eprintln!("Error: {err:#}");
            code_to_exit_code(exit_code::for_error(&err))
        }
    }
}

fn run(args: &Args) -> Result<()> {
    console::setup_global_trace(args.level)?;
    if args.version {
        println!("{NAME} {VERSION}");
        return Ok(());
    } else if let Some(shell) = args.completions {
        generate(shell, &mut Args::command(), NAME, &mut io::stdout());
        return Ok(());
    }
    let options = Options::from(args);
    debug!(?options);
    let outcomes = args
        .numbers
        .iter()
        .map(|&n| Outcome::evaluate(n, options.precision).with_context(|| format!("compute {n}!")))
        .collect::<Result<Vec<Outcome>>>()?;
    let text = outcome::format_outcomes(&outcomes, options.format)?;
    io::stdout()
        .lock()
        .write_all(text.as_bytes())
        .context("write results")?;
    Ok(())
}
