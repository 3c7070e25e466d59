use itertools::Itertools;
use log::debug;

use crate::stopwords::is_stopword;
use crate::tokenizer::{normalize, tokenize};
use crate::types::{Analysis, FrequencyTable, KeywordSet};

/// Number of entries shown in the most-common-words listing.
pub const TOP_WORDS: usize = 5;
/// Normalized tokens shorter than this are not meaningful.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Count tokens in a single pass.
pub fn analyze(content: &str, mut keywords: Option<KeywordSet>) -> Analysis {
    let mut frequencies = FrequencyTable::new();
    let mut raw_tokens = 0;
    let mut meaningful_tokens = 0;

    for token in tokenize(content) {
        raw_tokens += 1;

        let word = normalize(token);
        if word.chars().count() < MIN_TOKEN_CHARS || is_stopword(&word) {
            continue;
        }

        meaningful_tokens += 1;
        if let Some(set) = keywords.as_mut() {
            set.bump_existing(&word);
        }
        frequencies.bump(&word);
    }

    debug!(
        "{} raw tokens, {} meaningful, {} distinct words",
        raw_tokens,
        meaningful_tokens,
        frequencies.len()
    );

    Analysis {
        raw_tokens,
        meaningful_tokens,
        frequencies,
        keywords,
    }
}

/// Highest counts first; ties keep first-seen order.
pub fn top_words(frequencies: &FrequencyTable, limit: usize) -> Vec<(&str, usize)> {
    frequencies
        .iter()
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .take(limit)
        .collect()
}

/// Keywords with zero hits, in the order they were given.
pub fn missing_keywords(keywords: Option<&KeywordSet>) -> Vec<&str> {
    keywords
        .map(|set| set.iter().filter(|&(_, n)| n == 0).map(|(k, _)| k).collect())
        .unwrap_or_default()
}

impl Analysis {
    pub fn top_words(&self) -> Vec<(&str, usize)> {
        top_words(&self.frequencies, TOP_WORDS)
    }

    pub fn missing_keywords(&self) -> Vec<&str> {
        missing_keywords(self.keywords.as_ref())
    }
}
