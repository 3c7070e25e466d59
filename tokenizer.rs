use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that separate tokens in raw text.
pub const SEPARATORS: [char; 4] = [' ', '\n', '\r', '\t'];

// Anything that is not a word character or '#' ("c#" must survive)
static STRIP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w#]").unwrap());

/// Split raw text on the separator set, dropping empty pieces.
pub fn tokenize(content: &str) -> impl Iterator<Item = &str> {
    content.split(SEPARATORS).filter(|t| !t.is_empty())
}

/// Lowercase a token and strip every character that is not a word
/// character or '#'. Used for both file tokens and keywords.
pub fn normalize(token: &str) -> String {
    let lowered = token.to_lowercase();
    STRIP_REGEX.replace_all(&lowered, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_all_four_separators() {
        let tokens: Vec<_> = tokenize("a b\nc\r\nd\t\te").collect();
        assert_eq!(tokens, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" \r\n\t ").count(), 0);
    }

    #[test]
    fn other_whitespace_is_not_a_separator() {
        // no-break space stays inside the token
        assert_eq!(tokenize("a\u{00A0}b").count(), 1);
    }

    #[test]
    fn normalize_strips_punctuation_and_lowercases() {
        assert_eq!(normalize("Hello,"), "hello");
        assert_eq!(normalize("\"Quoted!\""), "quoted");
        assert_eq!(normalize("snake_case"), "snake_case");
        assert_eq!(normalize("--"), "");
    }

    #[test]
    fn normalize_keeps_hash() {
        assert_eq!(normalize("C#,"), "c#");
        assert_eq!(normalize("#Rust"), "#rust");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["Don't", "C#.", "ÉCOLE", "x-ray", "İstanbul", "42%"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}
