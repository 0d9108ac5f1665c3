//! Reader and writer for the three-section table file format.
//!
//! ```text
//! <arbitrary preamble lines>
//! BEGIN_TABLE
//! <key>\t<character>\t<weight>
//! END_TABLE
//! <arbitrary trailer lines>
//! ```
//!
//! Preamble and trailer lines are kept as raw strings, line terminators
//! included, and written back untouched. Only the body is interpreted.

use crate::error::{Result, TableError};
use crate::table::Table;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Line that ends the preamble.
pub const BEGIN_SENTINEL: &str = "BEGIN_TABLE";
/// Line that starts the trailer.
pub const END_SENTINEL: &str = "END_TABLE";

/// A parsed table file: opaque preamble, interpreted body, opaque trailer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFile {
    /// Raw lines up to and including the normalized `BEGIN_TABLE\n` line.
    pub preamble: Vec<String>,
    pub table: Table,
    /// Raw lines from the `END_TABLE` line to the end of input.
    pub trailer: Vec<String>,
}

/// Scanner state. Transitions only move forward, driven by sentinel lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadState {
    Preamble,
    Body,
    Trailer,
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Split one body line into `(key, character, weight)`.
///
/// Fields beyond the third are ignored.
fn parse_body_line(line_no: usize, line: &str) -> Result<(String, String, u64)> {
    let content = strip_terminator(line);
    let mut fields = content.trim().split('\t').map(str::trim);
    let (key, character, weight) = match (fields.next(), fields.next(), fields.next()) {
        (Some(k), Some(c), Some(w)) => (k, c, w),
        _ => {
            return Err(TableError::malformed(
                line_no,
                content,
                "expected three tab separated fields",
            ))
        }
    };
    let weight = weight.parse::<u64>().map_err(|e| {
        TableError::malformed(line_no, content, format!("invalid weight {:?}: {}", weight, e))
    })?;
    Ok((key.to_string(), character.to_string(), weight))
}

/// Parse a complete table file held in memory.
pub fn parse(text: &str) -> Result<TableFile> {
    let mut out = TableFile::default();
    let mut state = ReadState::Preamble;

    for (idx, line) in text.split_inclusive('\n').enumerate() {
        match state {
            ReadState::Preamble => {
                if strip_terminator(line) == BEGIN_SENTINEL {
                    out.preamble.push(format!("{}\n", BEGIN_SENTINEL));
                    debug!("header read ({} lines)", out.preamble.len());
                    state = ReadState::Body;
                } else {
                    out.preamble.push(line.to_string());
                }
            }
            ReadState::Body => {
                if strip_terminator(line) == END_SENTINEL {
                    debug!("table read ({} entries)", out.table.len());
                    out.trailer.push(line.to_string());
                    state = ReadState::Trailer;
                } else {
                    let (key, character, weight) = parse_body_line(idx + 1, line)?;
                    out.table.insert(key, character, weight);
                }
            }
            ReadState::Trailer => out.trailer.push(line.to_string()),
        }
    }

    match state {
        ReadState::Preamble => Err(TableError::MissingBeginSentinel),
        ReadState::Body => Err(TableError::MissingEndSentinel),
        ReadState::Trailer => Ok(out),
    }
}

/// Render preamble, sorted body and trailer back to text.
pub fn serialize(preamble: &[String], table: &Table, trailer: &[String]) -> String {
    let mut out = String::new();
    for line in preamble {
        out.push_str(line);
    }
    for e in table.sorted_entries() {
        out.push_str(&e.key);
        out.push('\t');
        out.push_str(&e.character);
        out.push('\t');
        out.push_str(&e.weight.to_string());
        out.push('\n');
    }
    for line in trailer {
        out.push_str(line);
    }
    out
}

impl TableFile {
    /// See [`parse`].
    pub fn parse(text: &str) -> Result<Self> {
        parse(text)
    }

    /// Read and parse a table file from disk.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("input file={}", path.display());
        let text = std::fs::read_to_string(path)?;
        let file = parse(&text)?;
        info!(
            "read {} entries from {} ({} preamble, {} trailer lines)",
            file.table.len(),
            path.display(),
            file.preamble.len(),
            file.trailer.len()
        );
        Ok(file)
    }

    /// See [`serialize`].
    pub fn to_text(&self) -> String {
        serialize(&self.preamble, &self.table, &self.trailer)
    }

    /// Write the serialized table to any writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.to_text().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
