//! Discovery module: Finding the files to scan
//!
//! Walks a file or directory root, pruning VCS and dependency
//! directories, and fails loudly on unreadable directories.

mod walker;

use std::path::PathBuf;

use thiserror::Error;

pub use walker::{FileEnumerator, EXCLUDED_DIRS};

/// Errors that can occur while enumerating files
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Path does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Path is neither a file nor a directory: {}", path.display())]
    Unsupported { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
