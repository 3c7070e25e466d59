use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Common low-information words excluded from counting.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // articles & conjunctions
        "the", "a", "an", "and", "or", "but", "as",
        // be-verbs
        "is", "are", "was", "were", "be",
        // prepositions
        "to", "of", "in", "on", "at", "for", "with", "by", "from", "over",
        // pronouns & determiners
        "it", "this", "that", "i", "you", "he", "she", "we", "they",
    ]
    .into_iter()
    .collect()
});

/// Case-insensitive stopword membership.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word.to_lowercase().as_str())
}
