//! Errors raised while converting readings and merging frequencies.

use libtable_core::TableError;
use std::path::PathBuf;

pub type Result<T, E = JyutpingError> = std::result::Result<T, E>;

/// All variants abort the run; a silently dropped syllable would corrupt the
/// merged frequencies.
#[derive(Debug, thiserror::Error)]
pub enum JyutpingError {
    /// The initials/finals tables cannot decompose this toneless key.
    #[error("unrecognized syllable {0:?}: no initial/final decomposition")]
    UnrecognizedSyllable(String),

    /// The reading does not end in a tone digit 1-6.
    #[error("invalid tone in reading {0:?}: expected a trailing digit 1-6")]
    InvalidTone(String),

    /// A `U+XXXX` field that is not a Unicode scalar value.
    #[error("invalid code point U+{codepoint} on line {line}")]
    InvalidCodepoint { line: usize, codepoint: String },

    #[error("failed to load configuration from {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
