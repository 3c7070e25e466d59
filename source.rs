use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use encoding_rs::UTF_8;
use log::{info, warn};

use crate::error::AnalyzerError;

/// Supplies raw document text for a path.
pub trait TextSource {
    /// Fails with `NotFound` when the path is not an existing file and
    /// with `Read` when the content cannot be loaded or decoded.
    fn read(&self, path: &Path) -> Result<String, AnalyzerError>;
}

/// Reads documents from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl TextSource for FileSource {
    fn read(&self, path: &Path) -> Result<String, AnalyzerError> {
        if !path.is_file() {
            return Err(AnalyzerError::NotFound(path.to_path_buf()));
        }

        let bytes = read_bytes(path).map_err(|e| {
            warn!("reading {} failed: {}", path.display(), e);
            AnalyzerError::Read(e)
        })?;
        info!("read {} bytes from {}", bytes.len(), path.display());

        decode(&bytes).map_err(AnalyzerError::Read)
    }
}

// The handle is dropped on every exit path, including a failed read.
fn read_bytes(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Decode as UTF-8 unless a UTF-8/UTF-16 byte-order mark says otherwise.
/// The BOM itself is stripped.
fn decode(bytes: &[u8]) -> io::Result<String> {
    let (text, encoding, had_errors) = UTF_8.decode(bytes);
    if had_errors {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("stream did not contain valid {} text", encoding.name()),
        ));
    }
    Ok(text.into_owned())
}
