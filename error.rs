use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Terminal failures of a run. The display text is what the user sees.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("No file path entered. Exiting.")]
    EmptyPath,
    #[error("File not found. Please check the path.")]
    NotFound(PathBuf),
    #[error("Failed to read file: {0}")]
    Read(#[source] io::Error),
    #[error("Console I/O failed: {0}")]
    Console(#[from] io::Error),
}

impl AnalyzerError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AnalyzerError::EmptyPath => 1,
            AnalyzerError::NotFound(_) => 2,
            AnalyzerError::Read(_) | AnalyzerError::Console(_) => 3,
        }
    }
}
