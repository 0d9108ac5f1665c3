//! Line filters operating on raw table text.
//!
//! Unlike the codec these do not interpret the file at all: a line is either
//! kept verbatim or dropped, wherever it appears.

/// True for code points whose Unicode name starts with
/// "CJK COMPATIBILITY IDEOGRAPH".
#[inline]
pub fn is_cjk_compatibility_ideograph(c: char) -> bool {
    matches!(c as u32,
        0xF900..=0xFA6D   | // CJK Compatibility Ideographs
        0xFA70..=0xFAD9   |
        0x2F800..=0x2FA1D   // CJK Compatibility Ideographs Supplement
    )
}

/// Drop every line containing a character matching `predicate`.
///
/// Returns the filtered text and the number of removed lines. Kept lines
/// retain their original terminators.
pub fn remove_lines_containing<F>(text: &str, predicate: F) -> (String, usize)
where
    F: Fn(char) -> bool,
{
    let mut out = String::with_capacity(text.len());
    let mut removed = 0;
    for line in text.split_inclusive('\n') {
        if line.chars().any(&predicate) {
            tracing::debug!("dropping line {:?}", line.trim_end());
            removed += 1;
        } else {
            out.push_str(line);
        }
    }
    (out, removed)
}
