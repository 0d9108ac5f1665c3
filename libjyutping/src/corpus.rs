//! Character readings and the frequency corpus derived from them.
//!
//! Readings come from `Unihan_Readings.txt`; only lines carrying a single
//! `kCantonese` reading are used:
//!
//! ```text
//! U+6642	kCantonese	si4
//! ```
//!
//! Each reading is turned into a [`FrequencyRecord`] keyed by its toneless
//! Jyutping and character, carrying the tone-letter key, the Cantonese
//! romanization and a frequency looked up in an existing Cantonese table.

use crate::converter::Converter;
use crate::error::{JyutpingError, Result};
use crate::tone::{encode_tone, split_tone};
use ahash::AHashMap;
use libtable_core::Table;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::{debug, info};

static READING_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^U\+(?P<codepoint>[0-9A-Z]+)\s+kCantonese\s+(?P<reading>[a-zA-Z1-6]+)$")
        .expect("reading pattern is valid")
});

/// One `kCantonese` reading of one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub character: String,
    /// Tone-marked Jyutping, e.g. `"si4"`.
    pub jyutping: String,
}

impl Reading {
    pub fn new<C: Into<String>, J: Into<String>>(character: C, jyutping: J) -> Self {
        Self {
            character: character.into(),
            jyutping: jyutping.into(),
        }
    }
}

/// Extract readings from Unihan readings text. Lines that do not match are
/// ignored.
pub fn parse_readings(text: &str) -> Result<Vec<Reading>> {
    let mut out = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let caps = match READING_LINE.captures(line) {
            Some(c) => c,
            None => continue,
        };
        let codepoint = &caps["codepoint"];
        let character = u32::from_str_radix(codepoint, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| JyutpingError::InvalidCodepoint {
                line: idx + 1,
                codepoint: codepoint.to_string(),
            })?;
        out.push(Reading::new(character, &caps["reading"]));
    }
    Ok(out)
}

/// Read and parse a Unihan readings file.
pub fn read_readings<P: AsRef<Path>>(path: P) -> Result<Vec<Reading>> {
    let path = path.as_ref();
    info!("input file={}", path.display());
    let text = std::fs::read_to_string(path)?;
    let readings = parse_readings(&text)?;
    info!("{} kCantonese readings in {}", readings.len(), path.display());
    Ok(readings)
}

/// Derived data for one `(toneless key, character)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyRecord {
    pub toneless: String,
    pub character: String,
    /// Tone-marked Jyutping (`"si4"`).
    pub jyutping: String,
    /// Key with the tone digit replaced by letters (`"sivv"`).
    pub tone_letters: String,
    /// Cantonese romanization of the toneless key (`"si"`).
    pub cantonese: String,
    /// Frequency found in the Cantonese table, 0 when absent.
    pub frequency: u64,
}

/// Insertion-ordered set of [`FrequencyRecord`]s.
///
/// A later record for the same `(toneless, character)` replaces the earlier
/// one in place.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCorpus {
    records: Vec<FrequencyRecord>,
    index: AHashMap<(String, String), usize>,
}

impl FrequencyCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: FrequencyRecord) {
        let id = (record.toneless.clone(), record.character.clone());
        match self.index.get(&id) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(id, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, toneless: &str, character: &str) -> Option<&FrequencyRecord> {
        self.index
            .get(&(toneless.to_string(), character.to_string()))
            .map(|&pos| &self.records[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Build the corpus from readings and an existing Cantonese frequency table.
///
/// Fails on the first reading whose tone is invalid or whose toneless key
/// cannot be converted.
pub fn build_corpus(
    readings: &[Reading],
    existing_frequencies: &Table,
    converter: &mut Converter,
) -> Result<FrequencyCorpus> {
    let mut corpus = FrequencyCorpus::new();
    let mut with_frequency = 0usize;
    for r in readings {
        let (toneless, _tone) = split_tone(&r.jyutping)?;
        let tone_letters = encode_tone(&r.jyutping)?;
        let cantonese = converter.convert(toneless)?;
        let frequency = existing_frequencies
            .get(&cantonese, &r.character)
            .unwrap_or(0);
        if frequency > 0 {
            with_frequency += 1;
        }
        corpus.insert(FrequencyRecord {
            toneless: toneless.to_string(),
            character: r.character.clone(),
            jyutping: r.jyutping.clone(),
            tone_letters,
            cantonese,
            frequency,
        });
    }
    debug!(
        "corpus: {} records from {} readings, {} with a frequency, {} syllables converted",
        corpus.len(),
        readings.len(),
        with_frequency,
        converter.cache().len()
    );
    Ok(corpus)
}
