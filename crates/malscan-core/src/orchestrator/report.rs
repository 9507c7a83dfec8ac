//! Per-file outcomes and the run report

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::config::ScanMode;
use crate::engine::ScanError;
use crate::verdict::{ScanResult, Verdict};

/// What happened to one file
///
/// The failure cause is kept until reporting; it only becomes an `error`
/// verdict when aggregated.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Verdict, ScanError>,
}

impl FileOutcome {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, result: Result<Verdict, ScanError>) -> Self {
        Self {
            path: path.into(),
            result,
        }
    }

    /// Verdict for aggregation, `error` when the scan failed
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        match &self.result {
            Ok(verdict) => *verdict,
            Err(_) => Verdict::Error,
        }
    }

    /// The failure cause, if the scan failed
    #[must_use]
    pub fn error(&self) -> Option<&ScanError> {
        self.result.as_ref().err()
    }
}

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    path: &'a Path,
    verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Serialize for FileOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OutcomeRecord {
            path: &self.path,
            verdict: self.verdict(),
            error: self.error().map(ToString::to_string),
        }
        .serialize(serializer)
    }
}

/// Detailed record of one orchestration run
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub id: String,
    pub scanned_at: DateTime<Utc>,
    pub mode: ScanMode,
    #[serde(flatten)]
    pub result: ScanResult,
    pub files: Vec<FileOutcome>,
}

impl ScanReport {
    /// Create a new report stamped with a fresh id and the current time
    #[must_use]
    pub fn new(mode: ScanMode, result: ScanResult, files: Vec<FileOutcome>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            scanned_at: Utc::now(),
            mode,
            result,
            files,
        }
    }

    /// Files with any verdict other than `clean`
    pub fn flagged(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|file| file.verdict().is_flagged())
    }

    /// Number of files whose scan failed
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|file| file.result.is_err()).count()
    }
}
