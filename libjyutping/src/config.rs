//! Configuration for the jyutping tools.

use crate::error::{JyutpingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Jyutping-specific configuration: the romanization rule tables used to
/// derive Cantonese (Yale-like) keys, plus the optional regional-usage
/// lookup endpoint.
///
/// All fields default to the built-in Jyutping → Cantonese tables, so a TOML
/// file only needs to list what it changes. Note that a table given in TOML
/// replaces the built-in table as a whole.
///
/// # Example
///
/// ```rust
/// use libjyutping::JyutpingConfig;
///
/// let config = JyutpingConfig::from_toml_str(r#"
/// [overrides]
/// zou = "jo"
/// "#).unwrap();
/// assert_eq!(config.overrides.len(), 1);
/// assert_eq!(config.initials.get("z").map(String::as_str), Some("j"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct JyutpingConfig {
    /// Endpoint for the regional usage classifier (feature `cloud`).
    pub classify_url: Option<String>,
    /// Request timeout for the classifier.
    pub classify_timeout_ms: u64,

    /// Jyutping initial -> Cantonese initial.
    pub initials: BTreeMap<String, String>,
    /// Jyutping final -> Cantonese final.
    pub finals: BTreeMap<String, String>,
    /// Whole toneless syllables converted directly, bypassing decomposition.
    pub overrides: BTreeMap<String, String>,
}

impl Default for JyutpingConfig {
    fn default() -> Self {
        Self {
            classify_url: None,
            classify_timeout_ms: 2000,
            initials: to_map(DEFAULT_INITIALS),
            finals: to_map(DEFAULT_FINALS),
            overrides: to_map(DEFAULT_OVERRIDES),
        }
    }
}

impl JyutpingConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| JyutpingError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Syllables that do not decompose the regular way.
pub const DEFAULT_OVERRIDES: &[(&str, &str)] = &[
    ("m", "m"),
    ("ng", "ng"),
    ("zou", "jo"), // 做, 早
    ("la", "la"),  // 喇
];

pub const DEFAULT_INITIALS: &[(&str, &str)] = &[
    ("b", "b"),
    ("p", "p"),
    ("m", "m"),
    ("f", "f"),
    ("d", "d"),
    ("t", "t"),
    ("n", "n"),
    ("l", "l"),
    ("g", "g"),
    ("k", "k"),
    ("ng", "ng"),
    ("h", "h"),
    ("gw", "gw"),
    ("kw", "kw"),
    ("w", "w"),
    ("z", "j"),
    ("c", "ch"),
    ("s", "s"),
    ("j", "y"),
];

pub const DEFAULT_FINALS: &[(&str, &str)] = &[
    ("aa", "a"),
    ("aai", "aai"),
    ("aau", "aau"),
    ("aam", "aam"),
    ("aan", "aan"),
    ("aang", "aang"),
    ("aap", "aap"),
    ("aat", "aat"),
    ("aak", "aak"),
    ("ai", "ai"),
    ("au", "au"),
    ("am", "am"),
    ("an", "an"), // 燜 is "men" in some sources
    ("ang", "ang"),
    ("ap", "ap"),
    ("at", "at"),
    ("ak", "ak"),
    ("e", "e"),
    ("ei", "ei"),
    ("eu", "eu"),
    ("em", "em"),
    ("en", "en"),
    ("eng", "eng"),
    ("ep", "ep"),
    ("et", "et"),
    ("ek", "ek"),
    ("i", "i"),
    ("iu", "iu"),
    ("im", "im"),
    ("in", "in"),
    ("ing", "ing"),
    ("ip", "ip"),
    ("it", "it"),
    ("ik", "ik"),
    ("o", "oh"),
    ("oi", "oi"),
    ("ou", "ou"),
    ("om", "yam"), // 媕
    ("on", "on"),
    ("ong", "ong"),
    ("ot", "ot"),
    ("ok", "ok"),
    ("u", "oo"),
    ("ui", "ooi"),
    ("un", "oon"),
    ("ung", "ung"),
    ("ut", "oot"),
    ("uk", "uk"),
    ("oe", "oe"),
    ("eoi", "ui"),
    ("eon", "un"),
    ("oeng", "eung"),
    ("eot", "ut"),
    ("oet", "ut"), // 㖀
    ("oek", "euk"),
    ("yu", "ue"),
    ("yun", "uen"),
    ("yut", "uet"),
    ("m", "am"),  // 噷 hm
    ("ng", "ang"), // 哼 hng
];
