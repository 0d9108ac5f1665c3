// libjyutping/src/converter.rs
//
// Jyutping -> Cantonese romanization of a single toneless syllable.
//
// A syllable is split into the longest matching initial and a final that
// must match the remainder exactly:
//   1. empty input converts to empty output
//   2. direct overrides ("zou" -> "jo") and previously resolved syllables
//   3. longest initial from the trie, then an exact final lookup
//
// Anything that does not decompose is an error; the caller aborts the run.

use crate::config::JyutpingConfig;
use crate::error::{JyutpingError, Result};
use libtable_core::PrefixTrie;
use std::collections::HashMap;
use tracing::trace;

/// Syllables resolved during one run.
///
/// Once a syllable has an entry it is never re-derived or evicted. A cache
/// belongs to exactly one [`Converter`] and so to one run.
#[derive(Debug, Clone, Default)]
pub struct ConversionCache {
    resolved: HashMap<String, String>,
}

impl ConversionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.resolved.get(key).map(String::as_str)
    }

    /// Record a resolution. An existing entry is kept as is.
    pub fn insert(&mut self, key: &str, value: &str) {
        self.resolved
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

/// Longest-match Jyutping -> Cantonese converter with a per-run cache.
#[derive(Debug, Clone)]
pub struct Converter {
    initials: PrefixTrie,
    finals: HashMap<String, String>,
    overrides: HashMap<String, String>,
    cache: ConversionCache,
}

impl Converter {
    /// Build a converter from explicit rule tables.
    pub fn new<I, F, O>(initials: I, finals: F, overrides: O) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
        F: IntoIterator<Item = (String, String)>,
        O: IntoIterator<Item = (String, String)>,
    {
        Self {
            initials: PrefixTrie::from_pairs(initials),
            finals: finals.into_iter().collect(),
            overrides: overrides.into_iter().collect(),
            cache: ConversionCache::new(),
        }
    }

    /// Build a converter from the tables of a [`JyutpingConfig`].
    pub fn from_config(config: &JyutpingConfig) -> Self {
        Self::new(
            config.initials.clone(),
            config.finals.clone(),
            config.overrides.clone(),
        )
    }

    /// Converter using the built-in tables.
    pub fn with_defaults() -> Self {
        Self::from_config(&JyutpingConfig::default())
    }

    /// Convert one toneless Jyutping syllable.
    ///
    /// # Examples
    /// ```
    /// use libjyutping::Converter;
    ///
    /// let mut conv = Converter::with_defaults();
    /// assert_eq!(conv.convert("gw").unwrap(), "gw");
    /// assert_eq!(conv.convert("zou").unwrap(), "jo");
    /// assert_eq!(conv.convert("aa").unwrap(), "a");
    /// assert_eq!(conv.convert("baa").unwrap(), "ba");
    /// assert_eq!(conv.convert("zoeng").unwrap(), "jeung");
    /// ```
    pub fn convert(&mut self, key: &str) -> Result<String> {
        if key.is_empty() {
            return Ok(String::new());
        }
        if let Some(v) = self.overrides.get(key) {
            return Ok(v.clone());
        }
        if let Some(v) = self.cache.get(key) {
            return Ok(v.to_string());
        }

        let resolved = self.decompose(key)?;
        trace!("resolved {} -> {}", key, resolved);
        self.cache.insert(key, &resolved);
        Ok(resolved)
    }

    fn decompose(&self, key: &str) -> Result<String> {
        let (initial, initial_value) = self.initials.longest_prefix(key).unwrap_or(("", ""));
        let rest = &key[initial.len()..];
        if rest.is_empty() {
            return Ok(initial_value.to_string());
        }
        match self.finals.get(rest) {
            Some(final_value) => {
                let mut out = String::with_capacity(initial_value.len() + final_value.len());
                out.push_str(initial_value);
                out.push_str(final_value);
                Ok(out)
            }
            None => Err(JyutpingError::UnrecognizedSyllable(key.to_string())),
        }
    }

    /// Syllables resolved so far in this run.
    pub fn cache(&self) -> &ConversionCache {
        &self.cache
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::with_defaults()
    }
}
