//! Error type shared by the table codec, the priority adjuster and the
//! configuration loaders.

use std::path::PathBuf;

/// Result alias defaulting to [`TableError`].
pub type Result<T, E = TableError> = std::result::Result<T, E>;

/// Everything that can go wrong while reading, adjusting or writing a table.
///
/// All variants are fatal for the current run: callers are expected to abort
/// rather than write a partially processed table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A line inside the table body could not be split into
    /// `key<TAB>character<TAB>weight`.
    #[error("malformed table entry on line {line}: {reason}: {content:?}")]
    MalformedEntry {
        /// 1-based line number in the input text.
        line: usize,
        content: String,
        reason: String,
    },

    /// Input ended before a `BEGIN_TABLE` line was seen.
    #[error("input ended before the BEGIN_TABLE line")]
    MissingBeginSentinel,

    /// Input ended inside the table body, before an `END_TABLE` line.
    #[error("input ended before the END_TABLE line")]
    MissingEndSentinel,

    #[error("failed to load configuration from {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TableError {
    pub(crate) fn malformed<C, R>(line: usize, content: C, reason: R) -> Self
    where
        C: Into<String>,
        R: Into<String>,
    {
        Self::MalformedEntry {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }
}
