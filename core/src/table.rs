//! In-memory table body.
//!
//! A `Table` maps `(key, character)` to a weight. Entries remember the order
//! in which they were first inserted so that exporting a table with equal
//! sort keys stays deterministic; re-inserting an existing pair only updates
//! its weight.

use ahash::AHashMap;
use std::cmp::Ordering;

/// A single `key<TAB>character<TAB>weight` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    /// Typed key sequence (e.g. "ab", "sivv").
    pub key: String,
    /// Target text selected by the key, normally one code point.
    pub character: String,
    /// Selection priority. Higher sorts first among entries sharing a key.
    pub weight: u64,
}

impl TableEntry {
    pub fn new<K: Into<String>, C: Into<String>>(key: K, character: C, weight: u64) -> Self {
        Self {
            key: key.into(),
            character: character.into(),
            weight,
        }
    }
}

/// Insertion-ordered mapping `(key, character) -> weight`.
#[derive(Debug, Clone, Default)]
pub struct Table {
    entries: Vec<TableEntry>,
    // (key, character) -> position in `entries`
    index: AHashMap<(String, String), usize>,
}

fn pair(key: &str, character: &str) -> (String, String) {
    (key.to_string(), character.to_string())
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the weight of `(key, character)`.
    ///
    /// Returns the previous weight when the pair already existed. The entry
    /// keeps its original position in that case.
    pub fn insert<K: Into<String>, C: Into<String>>(
        &mut self,
        key: K,
        character: C,
        weight: u64,
    ) -> Option<u64> {
        let key = key.into();
        let character = character.into();
        let id = pair(&key, &character);
        if let Some(&pos) = self.index.get(&id) {
            let old = self.entries[pos].weight;
            self.entries[pos].weight = weight;
            return Some(old);
        }
        self.index.insert(id, self.entries.len());
        self.entries.push(TableEntry {
            key,
            character,
            weight,
        });
        None
    }

    /// Weight of `(key, character)`, if present.
    pub fn get(&self, key: &str, character: &str) -> Option<u64> {
        self.index
            .get(&pair(key, character))
            .map(|&pos| self.entries[pos].weight)
    }

    pub fn contains(&self, key: &str, character: &str) -> bool {
        self.index.contains_key(&pair(key, character))
    }

    /// Overwrite the weight of an existing pair. Returns `false` (and does
    /// nothing) when the pair is absent.
    pub fn set_weight(&mut self, key: &str, character: &str, weight: u64) -> bool {
        match self.index.get(&pair(key, character)) {
            Some(&pos) => {
                self.entries[pos].weight = weight;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TableEntry> {
        self.entries.iter()
    }

    /// Entries in export order: key ascending, then weight descending.
    /// Exact ties keep insertion order.
    pub fn sorted_entries(&self) -> Vec<&TableEntry> {
        let mut out: Vec<&TableEntry> = self.entries.iter().collect();
        out.sort_by(|a, b| export_order(a, b));
        out
    }
}

fn export_order(a: &TableEntry, b: &TableEntry) -> Ordering {
    a.key.cmp(&b.key).then_with(|| b.weight.cmp(&a.weight))
}

impl PartialEq for Table {
    /// Two tables are equal when they hold the same set of entries,
    /// regardless of insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|e| other.get(&e.key, &e.character) == Some(e.weight))
    }
}

impl Eq for Table {}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a TableEntry;
    type IntoIter = std::slice::Iter<'a, TableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<TableEntry> for Table {
    fn from_iter<I: IntoIterator<Item = TableEntry>>(iter: I) -> Self {
        let mut t = Table::new();
        for e in iter {
            t.insert(e.key, e.character, e.weight);
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reinsert_overwrites_without_duplicating() {
        let mut t = Table::new();
        assert_eq!(t.insert("ab", "日", 10), None);
        assert_eq!(t.insert("ab", "日", 20), Some(10));
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("ab", "日"), Some(20));
    }

    #[test]
    fn set_weight_only_touches_existing() {
        let mut t = Table::new();
        t.insert("a", "甲", 1);
        assert!(t.set_weight("a", "甲", 5));
        assert!(!t.set_weight("b", "甲", 5));
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("a", "甲"), Some(5));
    }

    #[test]
    fn sorted_by_key_then_weight_desc() {
        let mut t = Table::new();
        t.insert("b", "乙", 1);
        t.insert("a", "甲", 1);
        t.insert("a", "乙", 7);
        t.insert("a", "丙", 1);
        let order: Vec<(&str, &str)> = t
            .sorted_entries()
            .into_iter()
            .map(|e| (e.key.as_str(), e.character.as_str()))
            .collect();
        // 甲 and 丙 tie on (key, weight) and keep insertion order
        assert_eq!(order, vec![("a", "乙"), ("a", "甲"), ("a", "丙"), ("b", "乙")]);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: Table = vec![TableEntry::new("a", "甲", 1), TableEntry::new("b", "乙", 2)]
            .into_iter()
            .collect();
        let b: Table = vec![TableEntry::new("b", "乙", 2), TableEntry::new("a", "甲", 1)]
            .into_iter()
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn key_and_character_do_not_collide() {
        let mut t = Table::new();
        t.insert("ab", "c", 1);
        t.insert("a", "bc", 2);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("ab", "c"), Some(1));
        assert_eq!(t.get("a", "bc"), Some(2));
    }

    #[test]
    fn tabs_inside_fields_do_not_collide() {
        let mut t = Table::new();
        t.insert("a\tb", "c", 1);
        t.insert("a", "b\tc", 2);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("a\tb", "c"), Some(1));
        assert_eq!(t.get("a", "b\tc"), Some(2));
        assert!(t.set_weight("a", "b\tc", 3));
        assert_eq!(t.get("a\tb", "c"), Some(1));
    }
}
