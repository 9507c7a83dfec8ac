//! Verdict module: File classifications and their aggregation
//!
//! A verdict classifies one file or a whole batch. Batches are reduced
//! with a fixed severity priority, `error > malicious > suspicious > clean`.

mod aggregate;
mod status;

pub use aggregate::aggregate;
pub use status::RunStatus;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a single file or an aggregated batch
///
/// Variants are declared in ascending severity, so the derived `Ord`
/// is the aggregation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Clean,
    Suspicious,
    Malicious,
    Error,
}

impl Verdict {
    /// All verdicts, lowest severity first
    pub const ALL: [Self; 4] = [Self::Clean, Self::Suspicious, Self::Malicious, Self::Error];

    /// Lower-case wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Suspicious => "suspicious",
            Self::Malicious => "malicious",
            Self::Error => "error",
        }
    }

    /// True for anything other than `clean`
    #[must_use]
    pub const fn is_flagged(&self) -> bool {
        !matches!(self, Self::Clean)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text is not one of the four verdict names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown verdict: {0:?}")]
pub struct ParseVerdictError(pub String);

impl FromStr for Verdict {
    type Err = ParseVerdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clean" => Ok(Self::Clean),
            "suspicious" => Ok(Self::Suspicious),
            "malicious" => Ok(Self::Malicious),
            "error" => Ok(Self::Error),
            _ => Err(ParseVerdictError(s.to_string())),
        }
    }
}

/// Outcome of a single orchestration run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub verdict: Verdict,
    pub scanned_files: usize,
}

impl ScanResult {
    /// Create a new scan result
    #[must_use]
    pub const fn new(verdict: Verdict, scanned_files: usize) -> Self {
        Self {
            verdict,
            scanned_files,
        }
    }

    /// Result for a run that found nothing to scan
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Verdict::Clean, 0)
    }

    /// Result for a run whose scanner could not be set up
    #[must_use]
    pub const fn setup_failed() -> Self {
        Self::new(Verdict::Error, 0)
    }
}
