use std::collections::HashMap;

/// Insertion-ordered word counter.
///
/// Keys keep the position at which they were first seen, so iteration
/// (and therefore stable ranking) is reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

/// Normalized token -> occurrences among meaningful tokens.
pub type FrequencyTable = Tally;

/// Normalized keyword -> hits, seeded at zero.
pub type KeywordSet = Tally;

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` with a count of 0. Returns false if it was already present.
    pub fn seed(&mut self, key: String) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, 0));
        true
    }

    /// Increment `key`, creating it at 1 when absent.
    pub fn bump(&mut self, key: &str) {
        if !self.bump_existing(key) {
            self.index.insert(key.to_string(), self.entries.len());
            self.entries.push((key.to_string(), 1));
        }
    }

    /// Increment `key` only if it is already tracked.
    pub fn bump_existing(&mut self, key: &str) -> bool {
        match self.index.get(key) {
            Some(&slot) => {
                self.entries[slot].1 += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), *n))
    }
}

/// Outcome of one pass over a document.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Whitespace-delimited chunks before any filtering.
    pub raw_tokens: usize,
    /// Tokens that survived the emptiness, length and stopword filters.
    pub meaningful_tokens: usize,
    pub frequencies: FrequencyTable,
    /// `None` when the user gave no keyword input.
    pub keywords: Option<KeywordSet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_creates_then_increments() {
        let mut t = Tally::new();
        t.bump("cat");
        t.bump("dog");
        t.bump("cat");
        assert_eq!(t.get("cat"), Some(2));
        assert_eq!(t.get("dog"), Some(1));
        assert_eq!(t.get("bird"), None);
        assert_eq!(t.total(), 3);
    }

    #[test]
    fn seed_deduplicates_and_keeps_order() {
        let mut t = Tally::new();
        assert!(t.seed("rust".into()));
        assert!(t.seed("go".into()));
        assert!(!t.seed("rust".into()));
        let keys: Vec<_> = t.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["rust", "go"]);
        assert!(t.iter().all(|(_, n)| n == 0));
    }

    #[test]
    fn bump_existing_ignores_unknown_keys() {
        let mut t = Tally::new();
        t.seed("cat".into());
        assert!(t.bump_existing("cat"));
        assert!(!t.bump_existing("dog"));
        assert!(!t.contains("dog"));
        assert_eq!(t.len(), 1);
    }
}
