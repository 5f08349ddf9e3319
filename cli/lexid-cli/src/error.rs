//! Error handling and display for the CLI.

use std::io::{self, Write};

use colored::Colorize;
use lexid::LexIdError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Overflow(LexIdError),

    #[error("invalid identifier '{input}': {source}")]
    InvalidId {
        input: String,
        #[source]
        source: LexIdError,
    },
}

impl CliError {
    /// Wrap a library error raised while handling `input`.
    pub fn from_lexid(input: &str, err: LexIdError) -> Self {
        if err.is_overflow() {
            Self::Overflow(err)
        } else {
            Self::InvalidId {
                input: input.to_string(),
                source: err,
            }
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    // Nothing sensible left to do if stderr itself is gone.
    let _ = write_error(&mut io::stderr().lock(), err);
}

fn write_error(out: &mut impl Write, err: &anyhow::Error) -> io::Result<()> {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Overflow(inner)) => {
            writeln!(out, "{} {}", "OverflowError:".red().bold(), inner)?;
            writeln!(
                out,
                "\n{}",
                "Hint: an identifier made only of nines has no successor. Start a new series from a smaller seed.".yellow()
            )?;
        }
        Some(CliError::InvalidId { .. }) => {
            writeln!(out, "{} {}", "Error:".red().bold(), err)?;
            writeln!(
                out,
                "\n{}",
                "Hint: identifiers contain only the digits 0-9, e.g. 1001.".yellow()
            )?;
        }
        None => writeln!(out, "{} {:#}", "Error:".red().bold(), err)?,
    }
    Ok(())
}
