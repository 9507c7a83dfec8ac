//! Engine module: Per-file scanning backends
//!
//! A [`Scanner`] classifies one file at a time. Two implementations exist:
//! [`LocalScanner`] runs a local engine command (or a heuristic fallback),
//! and [`RemoteScanner`] uploads files to a scanning API.

mod command;
mod heuristic;
mod local;
mod remote;

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::verdict::Verdict;

pub use command::EngineCommand;
pub use heuristic::{HeuristicScanner, BINARY_EXTENSIONS, LARGE_FILE_THRESHOLD};
pub use local::{LocalBackend, LocalScanner};
pub use remote::{RemoteScanner, API_KEY_HEADER, FILE_NAME_HEADER};

/// Errors that can occur while scanning a single file
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Engine `{command}` failed: {reason}")]
    Engine { command: String, reason: String },

    #[error("Engine produced an unreadable report: {0}")]
    EngineOutput(#[source] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("Malformed API response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("API returned unknown verdict {0:?}")]
    UnknownVerdict(String),
}

/// Native result shape of a local engine
///
/// Missing fields default to `false`; unknown fields are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(default)]
    pub malicious: bool,
    #[serde(default)]
    pub suspicious: bool,
}

impl Detection {
    #[must_use]
    pub const fn clean() -> Self {
        Self {
            malicious: false,
            suspicious: false,
        }
    }

    #[must_use]
    pub const fn suspicious() -> Self {
        Self {
            malicious: false,
            suspicious: true,
        }
    }

    #[must_use]
    pub const fn malicious() -> Self {
        Self {
            malicious: true,
            suspicious: false,
        }
    }

    /// `malicious` takes precedence over `suspicious`
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.malicious {
            Verdict::Malicious
        } else if self.suspicious {
            Verdict::Suspicious
        } else {
            Verdict::Clean
        }
    }
}

impl From<Detection> for Verdict {
    fn from(detection: Detection) -> Self {
        detection.verdict()
    }
}

/// Classifies a single file
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Scan the file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the backend fails.
    async fn scan_file(&self, path: &Path) -> Result<Verdict, ScanError>;

    /// Short backend name for logs
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests;
