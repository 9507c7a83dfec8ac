//! File walker: Discovers files in a directory tree

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::DiscoveryError;

/// Directory names that are never entered, at any depth
pub const EXCLUDED_DIRS: &[&str] = &[".git", "node_modules"];

/// Enumerates the files to scan below a root path
#[derive(Debug, Clone)]
pub struct FileEnumerator {
    root: PathBuf,
}

impl FileEnumerator {
    /// Create a new enumerator for the given file or directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// List every regular file under the root as an absolute path.
    ///
    /// A file root yields just itself. Directories are walked depth-first
    /// in file-name order; symlinks and special files are skipped.
    ///
    /// # Errors
    /// Returns an error if the root is missing or is not a file or
    /// directory, or if any directory in the tree cannot be read.
    pub fn enumerate(&self) -> Result<Vec<PathBuf>, DiscoveryError> {
        let root = self.absolute_root()?;
        let metadata = fs::metadata(&root).map_err(|source| DiscoveryError::Filesystem {
            path: root.clone(),
            source,
        })?;

        if metadata.is_file() {
            return Ok(vec![root]);
        }
        if !metadata.is_dir() {
            return Err(DiscoveryError::Unsupported { path: root });
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_excluded(entry));

        for entry in walker {
            let entry = entry.map_err(walk_error)?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        tracing::debug!("Enumerated {} files under {}", files.len(), root.display());
        Ok(files)
    }

    /// Get the root path as given
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn absolute_root(&self) -> Result<PathBuf, DiscoveryError> {
        self.root.canonicalize().map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                DiscoveryError::NotFound {
                    path: self.root.clone(),
                }
            } else {
                DiscoveryError::Filesystem {
                    path: self.root.clone(),
                    source,
                }
            }
        })
    }
}

/// Pruned directories, compared by base name. The root itself is never pruned.
fn is_excluded(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

fn walk_error(err: walkdir::Error) -> DiscoveryError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    DiscoveryError::Filesystem {
        path,
        source: err.into(),
    }
}
