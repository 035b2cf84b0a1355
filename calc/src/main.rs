//! Interactive calculator REPL.
//!
//! Reads infix expressions from standard input, one per line, and prints
//! their decimal value to standard output. Tokenizing, parsing and
//! evaluation errors are logged and reported on standard error with a
//! non-zero exit status; no partial result is ever printed for a failing
//! line (spec §7).

mod error;
mod parser;
mod tokenizer;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use log::{debug, error};

use crate::error::CalcError;

fn main() -> ExitCode {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("failed to read a line from standard input: {err}");
                return ExitCode::FAILURE;
            }
        };

        match evaluate_line(&line) {
            Ok(value) => {
                if writeln!(out, "{value}").is_err() {
                    return ExitCode::FAILURE;
                }
            }
            Err(err) => {
                error!("{err}");
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Tokenizes and parses one line, returning its evaluated decimal string.
fn evaluate_line(line: &str) -> Result<String, CalcError> {
    let tokens = tokenizer::tokenize(line)?;
    debug!("tokenized {line:?} -> {tokens:?}");
    let value = parser::parse(&tokens)?;
    debug!("evaluated to {value}");
    Ok(value.to_decimal())
}
