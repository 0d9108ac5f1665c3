//! Prefix trie mapping keys to replacement strings.
use std::collections::HashMap;

/// A prefix tree whose terminal nodes carry a value.
///
/// Used by the romanization converter to find the single longest initial
/// that prefixes a syllable. Because every key ends at its own node, two
/// distinct keys can never match the same input with the same length, so
/// the longest match is always unique.
///
/// # Example
/// ```
/// use libtable_core::trie::PrefixTrie;
///
/// let mut trie = PrefixTrie::new();
/// trie.insert("g", "g");
/// trie.insert("gw", "gw");
///
/// assert_eq!(trie.longest_prefix("gwaa"), Some(("gw", "gw")));
/// assert_eq!(trie.longest_prefix("aa"), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct PrefixTrie {
    children: HashMap<char, Box<PrefixTrie>>,
    /// `(key, value)` when a key ends at this node.
    entry: Option<(String, String)>,
}

impl PrefixTrie {
    /// Create an empty trie root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from `(key, value)` pairs. Empty keys are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut trie = Self::new();
        for (k, v) in pairs {
            trie.insert(k.as_ref(), v);
        }
        trie
    }

    /// Insert a key. Re-inserting a key replaces its value.
    pub fn insert<V: Into<String>>(&mut self, key: &str, value: V) {
        if key.is_empty() {
            return;
        }
        let mut node = self;
        for ch in key.chars() {
            node = &mut **node.children.entry(ch).or_default();
        }
        node.entry = Some((key.to_string(), value.into()));
    }

    /// Value stored for exactly `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut node = self;
        for ch in key.chars() {
            node = &**node.children.get(&ch)?;
        }
        node.entry.as_ref().map(|(_, v)| v.as_str())
    }

    /// Walk `input` from its start and return every stored key that is a
    /// prefix of it, shortest first, as `(key, value)`.
    pub fn walk_prefixes<'a>(&'a self, input: &str) -> Vec<(&'a str, &'a str)> {
        let mut res = Vec::new();
        let mut node = self;
        for ch in input.chars() {
            match node.children.get(&ch) {
                Some(child) => {
                    node = &**child;
                    if let Some((k, v)) = &node.entry {
                        res.push((k.as_str(), v.as_str()));
                    }
                }
                None => break,
            }
        }
        res
    }

    /// The longest stored key that prefixes `input`, with its value.
    pub fn longest_prefix<'a>(&'a self, input: &str) -> Option<(&'a str, &'a str)> {
        self.walk_prefixes(input).pop()
    }
}
