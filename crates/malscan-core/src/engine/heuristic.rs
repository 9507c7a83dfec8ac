//! Heuristic fallback used when no engine is installed
//!
//! Not real detection. It only flags large files and native binaries as
//! suspicious and never reports anything as malicious.

use std::path::Path;

use super::{Detection, ScanError};

/// Files strictly larger than this are suspicious (10 MiB)
pub const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

/// Native-binary extensions, compared case-insensitively
pub const BINARY_EXTENSIONS: &[&str] = &["exe", "dll", "so", "dylib"];

/// Size and extension heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScanner;

impl HeuristicScanner {
    /// Inspect a file on disk
    ///
    /// # Errors
    /// Returns an error if the file metadata cannot be read.
    pub async fn inspect(&self, path: &Path) -> Result<Detection, ScanError> {
        let metadata = tokio::fs::metadata(path).await?;
        Ok(Self::classify(path, metadata.len()))
    }

    /// Classify from the path and size alone
    #[must_use]
    pub fn classify(path: &Path, size: u64) -> Detection {
        if size > LARGE_FILE_THRESHOLD || has_binary_extension(path) {
            Detection::suspicious()
        } else {
            Detection::clean()
        }
    }
}

fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            BINARY_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
