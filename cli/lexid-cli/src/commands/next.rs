//! Generate the identifiers following a seed.

use std::io::Write;

use anyhow::{Context, Result};
use lexid::LexId;
use tracing::{debug, info, warn};

use crate::error::CliError;
use crate::output::{IdWriter, OutputMode};

/// Print `num` successors of `start_id`.
///
/// Ids generated before an overflow are still written out.
pub fn run(start_id: &str, num: usize, out: &mut impl Write, mode: OutputMode) -> Result<()> {
    let start = LexId::parse(start_id).map_err(|e| CliError::from_lexid(start_id, e))?;
    info!(start = %start, num, "generating identifiers");

    let mut writer = IdWriter::new(out, mode).context("failed to write output")?;

    for item in start.successors().take(num) {
        match item {
            Ok(id) => {
                debug!(id = %id, ordinal = %id.ordinal(), "generated identifier");
                writer.push(&id).context("failed to write output")?;
            }
            Err(err) => {
                warn!(error = %err, "identifier overflow");
                writer.finish().context("failed to write output")?;
                return Err(CliError::from_lexid(start_id, err).into());
            }
        }
    }

    writer.finish().context("failed to write output")?;
    Ok(())
}
