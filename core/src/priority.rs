//! Priority adjustment for marked key variants.
//!
//! Shape based tables such as Cangjie 5 prefix some keys with a reserved
//! marker (`x` for "difficult" characters). When the same character can also
//! be typed without the marker, or with one extra letter instead of it, the
//! unmarked path should win. `adjust` demotes those unmarked competitors to
//! a fixed weight and leaves the marked entries themselves alone.

use crate::config::DemotionRule;
use crate::table::Table;
use tracing::debug;

/// Applies a [`DemotionRule`] to a table.
#[derive(Debug, Clone)]
pub struct PriorityAdjuster {
    rule: DemotionRule,
}

impl PriorityAdjuster {
    pub fn new(rule: DemotionRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &DemotionRule {
        &self.rule
    }

    /// Demote every unmarked competitor of a marked entry.
    ///
    /// For each entry whose key starts with the marker, the stripped key and
    /// every `stripped + c` (for `c` in the alphabet, only while the stripped
    /// key is shorter than `max_key_length` characters) are looked up with the
    /// same character and, if present, set to `demoted_weight`. Targets whose
    /// key starts with the marker are skipped.
    ///
    /// Returns the number of weight writes that changed a value. Running it
    /// a second time on the same table returns 0.
    pub fn adjust(&self, table: &mut Table) -> usize {
        let rule = &self.rule;
        let marked: Vec<(String, String)> = table
            .iter()
            .filter_map(|e| {
                e.key
                    .strip_prefix(rule.marker)
                    .map(|short| (short.to_string(), e.character.clone()))
            })
            .collect();

        let mut changed = 0;
        for (short, character) in &marked {
            changed += self.demote(table, short, character);
            if short.chars().count() < rule.max_key_length {
                for extra in rule.alphabet.chars() {
                    let mut extended = String::with_capacity(short.len() + extra.len_utf8());
                    extended.push_str(short);
                    extended.push(extra);
                    changed += self.demote(table, &extended, character);
                }
            }
        }
        debug!(
            "{} marked entries checked, {} weights demoted to {}",
            marked.len(),
            changed,
            rule.demoted_weight
        );
        changed
    }

    fn demote(&self, table: &mut Table, key: &str, character: &str) -> usize {
        // marked entries are never touched, including the one being processed
        if key.starts_with(self.rule.marker) {
            return 0;
        }
        match table.get(key, character) {
            Some(w) if w != self.rule.demoted_weight => {
                debug!("demote {} {} {} -> {}", key, character, w, self.rule.demoted_weight);
                table.set_weight(key, character, self.rule.demoted_weight);
                1
            }
            _ => 0,
        }
    }
}

impl Default for PriorityAdjuster {
    fn default() -> Self {
        Self::new(DemotionRule::default())
    }
}

/// Convenience wrapper around [`PriorityAdjuster::adjust`].
pub fn adjust(table: &mut Table, rule: &DemotionRule) -> usize {
    PriorityAdjuster::new(rule.clone()).adjust(table)
}
