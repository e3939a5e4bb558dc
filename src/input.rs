//! Interactive collection of the run configuration.
//!
//! All prompts go to a caller-supplied writer and answers are read one line at a time from a
//! caller-supplied reader, so a whole session can be scripted in tests.

use crate::{config::RunConfig, fill::FillMode};
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const SIZE_PROMPT: &str = "Enter the size of the arrays: ";
pub const SIZE_ERROR: &str = "Error: the size must be greater than 0.";
pub const THREADS_PROMPT: &str = "Enter the number of threads to use: ";
pub const THREADS_ERROR: &str = "Error: the number of threads must be greater than 0.";
pub const NOT_A_NUMBER: &str = "Error: please enter a whole number.";

/// Errors returned while reading answers.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// The reader was exhausted while a prompt was still waiting for a valid answer.
    #[error("input ended before a valid value was entered")]
    EndOfInput,
}

/// Reads one line, returning [`None`] at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    match input.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line)),
    }
}

/// Prompts until a positive whole number is entered.
///
/// Non-positive answers print `error_msg`, answers that are not whole numbers print
/// [`NOT_A_NUMBER`]; both re-prompt without limit.
pub fn read_positive(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
    error_msg: &str,
) -> Result<usize, InputError> {
    loop {
        write!(out, "\n{prompt}")?;
        out.flush()?;
        let line = read_line(input)?.ok_or(InputError::EndOfInput)?;
        match line.trim().parse::<i64>() {
            Ok(v) if v > 0 => match usize::try_from(v) {
                Ok(v) => return Ok(v),
                Err(_) => writeln!(out, "{NOT_A_NUMBER}")?,
            },
            Ok(_) => writeln!(out, "{error_msg}")?,
            Err(_) => writeln!(out, "{NOT_A_NUMBER}")?,
        }
    }
}

/// Shows the fill menu and reads the choice. End of input counts as "not 1", i.e. random.
pub fn read_fill_mode(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<FillMode, InputError> {
    writeln!(out, "\n")?;
    writeln!(out, "Choose how to fill the arrays:")?;
    writeln!(out, "1. Sequential values")?;
    writeln!(out, "2. Random values (0-99)")?;
    write!(out, "Option: ")?;
    out.flush()?;
    let line = read_line(input)?.unwrap_or_default();
    Ok(FillMode::from_choice(&line))
}

/// Runs the three prompts in order: array size, thread count, fill mode.
pub fn read_config(
    input: &mut impl BufRead,
    out: &mut impl Write,
    seed: Option<u64>,
) -> Result<RunConfig, InputError> {
    let len = read_positive(input, out, SIZE_PROMPT, SIZE_ERROR)?;
    let threads = read_positive(input, out, THREADS_PROMPT, THREADS_ERROR)?;
    let fill = read_fill_mode(input, out)?;
    log::debug!("configured len={len}, threads={threads}, fill={fill:?}");
    Ok(RunConfig {
        len,
        threads,
        fill,
        seed,
    })
}
