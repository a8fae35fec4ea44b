// Static lookup tables consumed by the transfer engine
//
// Both the structural pattern table and the dictionary are stored per language
// pair as two parallel columns and oriented into a key -> value map once the
// transfer direction is known:
// - loader: reads pair tables from .tsv/.txt or .json files
// - TranslationTable: ordered map where the first entry for a key wins

pub mod loader;

use std::collections::HashMap;
use tracing::{debug, info, warn};

pub use loader::*;

use crate::config::Config;
use crate::direction::Direction;
use crate::error::Result;
use crate::transfer::MAX_CHUNK_LEN;

/// Key -> value map with first-insertion-wins semantics on duplicate keys
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
    shadowed: usize,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry unless the key is already present; returns whether it was stored
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.entries.contains_key(&key) {
            self.shadowed += 1;
            return false;
        }
        self.entries.insert(key, value.into());
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of later duplicates that were ignored
    pub fn shadowed(&self) -> usize {
        self.shadowed
    }

    /// Keys spanning more tag strings than `max_tokens`, in no particular order
    pub fn keys_longer_than(&self, max_tokens: usize) -> Vec<&str> {
        self.entries
            .keys()
            .filter(|key| key.split_whitespace().count() > max_tokens)
            .map(String::as_str)
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

/// Two index-aligned columns, one per language of a pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable {
    pub rows: Vec<(String, String)>,
}

impl PairTable {
    pub fn new(rows: Vec<(String, String)>) -> Self {
        Self { rows }
    }

    /// Build the lookup map; with `reversed` the right column becomes the key
    pub fn orient(&self, reversed: bool) -> TranslationTable {
        self.rows
            .iter()
            .map(|(left, right)| if reversed { (right, left) } else { (left, right) })
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect()
    }
}

/// The pattern table and dictionary for one transfer direction
#[derive(Debug, Clone)]
pub struct TableSet {
    pub direction: Direction,
    pub patterns: TranslationTable,
    pub dictionary: TranslationTable,
}

impl TableSet {
    pub fn new(direction: Direction, patterns: TranslationTable, dictionary: TranslationTable) -> Self {
        Self {
            direction,
            patterns,
            dictionary,
        }
    }

    /// Load both tables for `direction` from the files of the pair that serves it
    pub fn load(config: &Config, direction: &Direction) -> Result<Self> {
        let (pair, reversed) = config.pair_for(direction)?;
        info!(
            "Loading tables for {} (pair {}/{})",
            direction, pair.languages[0], pair.languages[1]
        );

        let patterns_path = config.resolve_path(&pair.patterns);
        let dictionary_path = config.resolve_path(&pair.dictionary);

        let patterns = load_pair_table(&patterns_path, &pair.languages)?.orient(reversed);
        let dictionary = load_pair_table(&dictionary_path, &pair.languages)?.orient(reversed);

        debug!(
            "Pattern table: {} entries ({} shadowed duplicates) from {}",
            patterns.len(),
            patterns.shadowed(),
            patterns_path.display()
        );
        debug!(
            "Dictionary: {} entries ({} shadowed duplicates) from {}",
            dictionary.len(),
            dictionary.shadowed(),
            dictionary_path.display()
        );

        let unreachable = patterns.keys_longer_than(MAX_CHUNK_LEN);
        if !unreachable.is_empty() {
            warn!(
                "{} patterns in {} span more than {} tokens and can never match (e.g. '{}')",
                unreachable.len(),
                patterns_path.display(),
                MAX_CHUNK_LEN,
                unreachable[0]
            );
        }

        Ok(Self::new(direction.clone(), patterns, dictionary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_insertion_wins() {
        let mut table = TranslationTable::new();
        assert!(table.insert("<n><sg>", "<n><nom>"));
        assert!(!table.insert("<n><sg>", "<n><acc>"));
        assert_eq!(table.get("<n><sg>"), Some("<n><nom>"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.shadowed(), 1);
    }

    #[test]
    fn test_orient_pair_table() {
        let pair = PairTable::new(vec![
            ("book".to_string(), "кітап".to_string()),
            ("tome".to_string(), "кітап".to_string()),
        ]);

        let forward = pair.orient(false);
        assert_eq!(forward.get("book"), Some("кітап"));
        assert_eq!(forward.get("tome"), Some("кітап"));

        // Both rows share the right-hand key; the first one wins
        let backward = pair.orient(true);
        assert_eq!(backward.get("кітап"), Some("book"));
        assert_eq!(backward.len(), 1);
        assert_eq!(backward.shadowed(), 1);
    }

    #[test]
    fn test_keys_longer_than_window() {
        let table: TranslationTable = [
            ("<n><sg>", "<n><nom>"),
            ("<a> <b> <c> <d> <e> <f>", "<x>"),
            ("<a> <b> <c> <d> <e> <f> <g>", "<y>"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.keys_longer_than(MAX_CHUNK_LEN), vec!["<a> <b> <c> <d> <e> <f> <g>"]);
        assert!(table.keys_longer_than(7).is_empty());
    }

    #[test]
    fn test_missing_key() {
        let table: TranslationTable = [("a", "b")].into_iter().collect();
        assert!(table.contains_key("a"));
        assert!(!table.contains_key("b"));
        assert_eq!(table.get("b"), None);
        assert!(!table.is_empty());
    }
}
