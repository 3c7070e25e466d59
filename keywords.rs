use log::debug;

use crate::tokenizer::normalize;
use crate::types::{KeywordSet, Tally};

/// Build the keyword set from a comma-separated line.
///
/// Blank input means keyword analysis is skipped (`None`). Otherwise every
/// piece is trimmed and normalized; pieces that normalize to nothing are
/// dropped, so input like ",,,," gives a present but empty set.
pub fn build_keyword_set(raw: &str) -> Option<KeywordSet> {
    if raw.trim().is_empty() {
        return None;
    }

    let mut set = Tally::new();
    raw.split(',')
        .map(str::trim)
        .map(normalize)
        .filter(|k| !k.is_empty())
        .for_each(|k| {
            set.seed(k);
        });

    debug!("keyword set built with {} distinct keywords", set.len());
    Some(set)
}
