//! Decode identifiers to their ordinal values.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use lexid::LexId;

use crate::error::CliError;
use crate::output::{IdWriter, OutputMode};

/// Show the ordinal value of identifiers.
#[derive(Debug, Args)]
pub struct OrdCommand {
    /// Identifiers to decode.
    #[arg(required = true)]
    ids: Vec<String>,
}

impl OrdCommand {
    pub fn run(self, out: &mut impl Write, mode: OutputMode) -> Result<()> {
        // Validate everything up front so bad input prints nothing.
        let ids = self
            .ids
            .iter()
            .map(|s| LexId::parse(s).map_err(|e| CliError::from_lexid(s, e)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut writer = IdWriter::new(out, mode.with_ordinals()).context("failed to write output")?;
        for id in &ids {
            writer.push(id).context("failed to write output")?;
        }
        writer.finish().context("failed to write output")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ids: &[&str], mode: OutputMode) -> (String, Result<()>) {
        let cmd = OrdCommand {
            ids: ids.iter().map(|s| s.to_string()).collect(),
        };
        let mut out = Vec::new();
        let result = cmd.run(&mut out, mode);
        (String::from_utf8(out).unwrap(), result)
    }

    #[test]
    fn decodes_in_table_form() {
        let (out, result) = run(&["1", "01", "110"], OutputMode::Bare);
        assert!(result.is_ok());
        let ordinals: Vec<_> = out
            .lines()
            .skip(1)
            .map(|line| line.split_whitespace().nth(1).unwrap().to_string())
            .collect();
        assert_eq!(ordinals, ["1", "1", "10"]);
    }

    #[test]
    fn rejects_malformed_ids_before_printing() {
        let (out, result) = run(&["110", "x"], OutputMode::Debug);
        assert!(out.is_empty());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidId { input, .. }) if input == "x"
        ));
    }
}
