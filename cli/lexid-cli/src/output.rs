//! Output formatting for CLI commands.

use std::io::{self, Write};

use lexid::LexId;
use serde::Serialize;

/// Column layout shared by the header, rows and elision markers.
const COLUMNS: (usize, usize) = (13, 12);

/// How generated identifiers are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One bare identifier per line.
    #[default]
    Bare,
    /// A `lexical`/`numerical` table.
    Debug,
    /// A JSON array of `{ "id", "ordinal" }` objects.
    Json,
}

impl OutputMode {
    /// Resolve the mode from the `--format` and `--debug` flags.
    pub fn from_flags(format: &str, debug: bool) -> Self {
        match format {
            "json" => OutputMode::Json,
            _ if debug => OutputMode::Debug,
            _ => OutputMode::Bare,
        }
    }

    /// Like `self`, but bare output gets the table so ordinals are shown.
    pub fn with_ordinals(self) -> Self {
        match self {
            OutputMode::Bare => OutputMode::Debug,
            other => other,
        }
    }
}

#[derive(Debug, Serialize)]
struct IdRow {
    id: LexId,
    ordinal: serde_json::Value,
}

impl IdRow {
    fn new(id: &LexId) -> Self {
        Self {
            id: id.clone(),
            ordinal: ordinal_value(id.ordinal()),
        }
    }
}

/// Writes identifiers in the selected mode.
///
/// Text modes stream line by line; JSON rows are buffered until
/// [`IdWriter::finish`].
pub struct IdWriter<W: Write> {
    out: W,
    mode: OutputMode,
    rows: Vec<IdRow>,
}

impl<W: Write> IdWriter<W> {
    /// Create a writer, emitting the table header in debug mode.
    pub fn new(mut out: W, mode: OutputMode) -> io::Result<Self> {
        if mode == OutputMode::Debug {
            writeln!(out, "{}", table_line("lexical", "numerical"))?;
        }
        Ok(Self {
            out,
            mode,
            rows: Vec::new(),
        })
    }

    /// Write one identifier.
    pub fn push(&mut self, id: &LexId) -> io::Result<()> {
        match self.mode {
            OutputMode::Bare => writeln!(self.out, "{id}"),
            OutputMode::Debug => writeln!(self.out, "{}", table_line(id, id.ordinal())),
            OutputMode::Json => {
                self.rows.push(IdRow::new(id));
                Ok(())
            }
        }
    }

    /// Mark skipped identifiers. Only the table shows the gap.
    pub fn ellipsis(&mut self) -> io::Result<()> {
        if self.mode == OutputMode::Debug {
            writeln!(self.out, "{}", table_line("...", "..."))?;
        }
        Ok(())
    }

    /// Flush buffered output and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        if self.mode == OutputMode::Json {
            serde_json::to_writer_pretty(&mut self.out, &self.rows)?;
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

fn table_line(lexical: impl std::fmt::Display, numerical: impl std::fmt::Display) -> String {
    let (left, right) = COLUMNS;
    format!("{lexical:<left$} {numerical:>right$}")
}

/// JSON numbers above `u64` lose precision in most consumers; send them as strings.
fn ordinal_value(ordinal: u128) -> serde_json::Value {
    match u64::try_from(ordinal) {
        Ok(value) => serde_json::Value::from(value),
        Err(_) => serde_json::Value::String(ordinal.to_string()),
    }
}
