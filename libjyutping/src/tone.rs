//! Tone digit -> tone letter encoding.
//!
//! Jyutping marks tone with a trailing digit; typing tables use letters
//! instead so the tone can be entered from the letter keys:
//!
//! | digit | letters | example        |
//! |-------|---------|----------------|
//! | 1     | `v`     | siv → 詩       |
//! | 2     | `x`     | six → 史       |
//! | 3     | `q`     | siq → 試       |
//! | 4     | `vv`    | sivv → 時      |
//! | 5     | `xx`    | sixx → 市      |
//! | 6     | `qq`    | siqq → 事      |

use crate::error::{JyutpingError, Result};

/// Letters for tones 1 to 6, indexed by `tone - 1`.
pub const TONE_LETTERS: [&str; 6] = ["v", "x", "q", "vv", "xx", "qq"];

/// Letters for a single tone number.
pub fn tone_letters(tone: u8) -> Option<&'static str> {
    match tone {
        1..=6 => Some(TONE_LETTERS[usize::from(tone - 1)]),
        _ => None,
    }
}

/// Split a reading such as `"si4"` into its toneless key and tone number.
pub fn split_tone(reading: &str) -> Result<(&str, u8)> {
    let invalid = || JyutpingError::InvalidTone(reading.to_string());
    let last = reading.chars().last().ok_or_else(invalid)?;
    let tone = last.to_digit(10).ok_or_else(invalid)?;
    if !(1..=6).contains(&tone) {
        return Err(invalid());
    }
    // digits are ASCII, so the last byte is the digit
    Ok((&reading[..reading.len() - 1], tone as u8))
}

/// Replace the trailing tone digit with its letters.
///
/// ```
/// use libjyutping::encode_tone;
///
/// assert_eq!(encode_tone("si1").unwrap(), "siv");
/// assert_eq!(encode_tone("si4").unwrap(), "sivv");
/// assert!(encode_tone("si7").is_err());
/// ```
pub fn encode_tone(reading: &str) -> Result<String> {
    let (toneless, tone) = split_tone(reading)?;
    let letters = tone_letters(tone).ok_or_else(|| JyutpingError::InvalidTone(reading.to_string()))?;
    Ok(format!("{}{}", toneless, letters))
}
