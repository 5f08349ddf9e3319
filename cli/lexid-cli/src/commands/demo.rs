//! Walk a full series to show how identifiers grow.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use lexid::LexId;
use tracing::debug;

use crate::error::CliError;
use crate::output::{IdWriter, OutputMode};

/// Walk a series until it runs out, showing the edges of each width.
#[derive(Debug, Args)]
pub struct DemoCommand {
    /// First identifier of the series.
    #[arg(long, default_value = "01")]
    start: String,

    /// Identifiers shown at each end of a width before eliding the rest.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..))]
    edge: u8,
}

impl DemoCommand {
    pub fn run(self, out: &mut impl Write, mode: OutputMode) -> Result<()> {
        let start = LexId::parse(&self.start).map_err(|e| CliError::from_lexid(&self.start, e))?;
        let mut writer = IdWriter::new(out, mode.with_ordinals()).context("failed to write output")?;

        walk(start, u128::from(self.edge), &mut writer)?;

        writer.finish().context("failed to write output")?;
        Ok(())
    }
}

/// Write the series from `current` on, one width at a time.
fn walk<W: Write>(mut current: LexId, edge: u128, writer: &mut IdWriter<W>) -> Result<()> {
    loop {
        let width = current.width();
        // Payloads are at most 38 digits, so this stays inside u128.
        let last = 10u128.pow(current.payload().len() as u32) - 1;
        debug!(id = %current, width, "walking width");

        if last - current.ordinal() + 1 > 2 * edge {
            for _ in 0..edge {
                writer.push(&current).context("failed to write output")?;
                current = current.next()?;
            }
            writer.ellipsis().context("failed to write output")?;
            current = current
                .with_ordinal(last + 1 - edge)
                .context("tail of width does not fit its payload")?;
        }

        loop {
            writer.push(&current).context("failed to write output")?;
            match current.next() {
                Ok(next) if next.width() == width => current = next,
                Ok(next) => {
                    current = next;
                    break;
                }
                // End of the series.
                Err(err) if err.is_overflow() => return Ok(()),
                Err(err) => return Err(err.into()),
            }
        }
    }
}
