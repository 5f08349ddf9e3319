//! CLI commands.

mod demo;
mod next;
mod ord;

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use lexid::LexId;

use crate::output::OutputMode;

/// lexid - increment build numbers that sort lexically and numerically alike.
#[derive(Debug, Parser)]
#[command(name = "lexid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Identifier to start from; the first printed id is its successor.
    #[arg(default_value = LexId::DEFAULT_START, env = "LEXID_START")]
    start_id: String,

    /// Number of identifiers to generate.
    #[arg(short = 'n', long = "num", default_value_t = 1)]
    num: usize,

    /// Print a lexical/numerical table instead of bare ids.
    #[arg(long, global = true)]
    debug: bool,

    /// Output format (text or json).
    #[arg(long, global = true, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the ordinal value of identifiers.
    Ord(ord::OrdCommand),

    /// Walk a whole series, eliding the middle of each width.
    Demo(demo::DemoCommand),
}

impl Cli {
    /// Run the CLI command against stdout.
    pub fn run(self) -> Result<()> {
        let stdout = io::stdout();
        self.run_with(&mut stdout.lock())
    }

    fn run_with(self, out: &mut impl Write) -> Result<()> {
        let mode = OutputMode::from_flags(&self.format, self.debug);

        match self.command {
            Some(Commands::Ord(cmd)) => cmd.run(out, mode),
            Some(Commands::Demo(cmd)) => cmd.run(out, mode),
            None => next::run(&self.start_id, self.num, out, mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn run(args: &[&str]) -> (String, Result<()>) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result = cli.run_with(&mut out);
        (String::from_utf8(out).unwrap(), result)
    }

    #[test]
    fn defaults_to_one_increment_from_1001() {
        let cli = Cli::try_parse_from(["lexid"]).unwrap();
        assert_eq!(cli.num, 1);
        assert!(!cli.debug);
        assert!(cli.command.is_none());

        let (out, result) = run(&["lexid"]);
        assert!(result.is_ok());
        // LEXID_START may override the seed; the output is one id either way.
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn generates_requested_count() {
        let (out, result) = run(&["lexid", "09", "-n", "3"]);
        assert!(result.is_ok());
        assert_eq!(out, "110\n111\n112\n");
    }

    #[test]
    fn debug_prints_header_and_ordinals() {
        let (out, result) = run(&["lexid", "1998", "--num", "2", "--debug"]);
        assert!(result.is_ok());
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].contains("lexical") && lines[0].contains("numerical"));
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["1999", "999"]);
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), ["21000", "1000"]);
    }

    #[test]
    fn overflow_is_an_error_after_partial_output() {
        let (out, result) = run(&["lexid", "9997", "-n", "5"]);
        assert_eq!(out, "9998\n9999\n");
        let err = result.unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::Overflow(_))));
    }

    #[test]
    fn invalid_start_is_rejected() {
        let (out, result) = run(&["lexid", "1.0"]);
        assert!(out.is_empty());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidId { .. })
        ));
    }

    #[test]
    fn subcommands_take_precedence_over_start_id() {
        let cli = Cli::try_parse_from(["lexid", "ord", "110"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Ord(_))));

        let cli = Cli::try_parse_from(["lexid", "--debug", "demo"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Some(Commands::Demo(_))));
    }

    #[test]
    fn json_format_emits_array() {
        let (out, result) = run(&["lexid", "01", "-n", "2", "--format", "json"]);
        assert!(result.is_ok());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "id": "02", "ordinal": 2 },
                { "id": "03", "ordinal": 3 }
            ])
        );
    }
}
