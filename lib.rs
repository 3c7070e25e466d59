//! Interactive word counter: tokenizes a text file, filters stopwords,
//! ranks the most common words and tallies user-supplied keywords.

pub mod analyzer;
pub mod error;
pub mod keywords;
pub mod logging;
pub mod report;
pub mod session;
pub mod source;
pub mod stopwords;
pub mod tokenizer;
pub mod types;

pub use analyzer::{analyze, TOP_WORDS};
pub use error::AnalyzerError;
pub use keywords::build_keyword_set;
pub use source::{FileSource, TextSource};
pub use types::{Analysis, FrequencyTable, KeywordSet, Tally};
