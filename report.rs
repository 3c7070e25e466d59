use std::io::{self, Write};

use crate::analyzer::TOP_WORDS;
use crate::types::Analysis;

/// Write the analysis summary in its user-facing layout.
pub fn render<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "File analyzed successfully!")?;
    writeln!(out, "Raw token count: {}", analysis.raw_tokens)?;
    writeln!(
        out,
        "Meaningful token count (after filtering): {}",
        analysis.meaningful_tokens
    )?;

    if let Some(keywords) = &analysis.keywords {
        writeln!(out)?;
        writeln!(out, "Keyword hits:")?;
        for (key, hits) in keywords.iter() {
            writeln!(out, "{}: {} times", key, hits)?;
        }

        let missing = analysis.missing_keywords();
        if !missing.is_empty() {
            writeln!(out)?;
            writeln!(out, "Keywords not found:")?;
            for key in missing {
                writeln!(out, " - {}", key)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Top {} Most Common Words:", TOP_WORDS)?;
    for (word, count) in analysis.top_words() {
        writeln!(out, "{}: {} times", word, count)?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::keywords::build_keyword_set;

    fn rendered(analysis: &Analysis) -> String {
        let mut buf = Vec::new();
        render(&mut buf, analysis).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn without_keywords_there_is_no_keyword_section() {
        let text = rendered(&analyze("cat cat dog", None));
        assert_eq!(
            text,
            "\nFile analyzed successfully!\n\
             Raw token count: 3\n\
             Meaningful token count (after filtering): 3\n\
             \nTop 5 Most Common Words:\n\
             cat: 2 times\n\
             dog: 1 times\n"
        );
    }

    #[test]
    fn keyword_section_lists_hits_then_misses() {
        let text = rendered(&analyze("cat cat dog", build_keyword_set("cat, bird")));
        assert!(text.contains(
            "\nKeyword hits:\ncat: 2 times\nbird: 0 times\n\nKeywords not found:\n - bird\n"
        ));
        assert!(text.ends_with("\nTop 5 Most Common Words:\ncat: 2 times\ndog: 1 times\n"));
    }

    #[test]
    fn empty_keyword_set_prints_bare_header() {
        let text = rendered(&analyze("cat", build_keyword_set(",,,,")));
        assert!(text.contains("\nKeyword hits:\n\nTop 5 Most Common Words:\n"));
        assert!(!text.contains("Keywords not found:"));
    }
}
