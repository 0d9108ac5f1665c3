//! TOML backed configuration for table adjustments.
//!
//! ```toml
//! marker = "x"
//! demoted_weight = 900
//! max_key_length = 5
//! alphabet = "abcdefghijklmnopqrstuvwxyz"
//! ```
//!
//! Missing fields fall back to the Cangjie 5 defaults.

use crate::error::{Result, TableError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of the marked-key demotion performed by
/// [`PriorityAdjuster`](crate::priority::PriorityAdjuster).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DemotionRule {
    /// Reserved leading character marking a redundant input path.
    pub marker: char,
    /// Weight written to demoted competitors.
    pub demoted_weight: u64,
    /// One-letter extensions are only tried while the stripped key is
    /// shorter than this many characters.
    pub max_key_length: usize,
    /// Letters tried as the extra trailing character.
    pub alphabet: String,
}

impl Default for DemotionRule {
    fn default() -> Self {
        Self {
            marker: 'x',
            demoted_weight: 900,
            max_key_length: 5,
            alphabet: "abcdefghijklmnopqrstuvwxyz".to_string(),
        }
    }
}

impl DemotionRule {
    /// Load a rule from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| TableError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parse a rule from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize the rule to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
