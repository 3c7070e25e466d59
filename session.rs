use std::io::{BufRead, Write};
use std::path::Path;

use log::debug;

use crate::analyzer::analyze;
use crate::error::AnalyzerError;
use crate::keywords::build_keyword_set;
use crate::report;
use crate::source::TextSource;
use crate::types::Analysis;

const PATH_PROMPT: &str = "Enter the path to your text file: ";
const KEYWORD_PROMPT: &str = "Enter keywords (comma-separated), or leave blank: ";

/// One interactive run: ask for a file, ask for keywords, print the report.
///
/// Nothing is printed past the failing step when an error is returned.
pub fn run<R, W>(
    input: &mut R,
    out: &mut W,
    source: &dyn TextSource,
) -> Result<Analysis, AnalyzerError>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "=== Document Analyzer ===")?;
    writeln!(out, "Simple Word Counter")?;
    writeln!(out)?;

    let path = prompt(input, out, PATH_PROMPT)?;
    let path = path.trim();
    if path.is_empty() {
        return Err(AnalyzerError::EmptyPath);
    }

    let content = source.read(Path::new(path))?;
    debug!("loaded {} chars from {}", content.chars().count(), path);

    let raw_keywords = prompt(input, out, KEYWORD_PROMPT)?;
    let analysis = analyze(&content, build_keyword_set(&raw_keywords));

    report::render(out, &analysis)?;
    Ok(analysis)
}

// EOF reads as an empty line.
fn prompt<R, W>(input: &mut R, out: &mut W, text: &str) -> Result<String, AnalyzerError>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
