//! Pass/fail decision for a finished run

use super::{ScanResult, Verdict};

/// Whether a finished run should be reported as failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Nothing actionable was found
    Passed,
    /// Malicious content found while failing on detection
    Detected,
    /// At least one file could not be scanned
    Errored,
}

impl RunStatus {
    /// Decide the run status from its result.
    ///
    /// An `error` verdict fails the run even when `fail_on_detection`
    /// is off. `suspicious` never fails a run.
    #[must_use]
    pub const fn decide(result: &ScanResult, fail_on_detection: bool) -> Self {
        match result.verdict {
            Verdict::Error => Self::Errored,
            Verdict::Malicious if fail_on_detection => Self::Detected,
            _ => Self::Passed,
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !matches!(self, Self::Passed)
    }

    /// Process exit code for this status
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Passed => 0,
            Self::Detected => 1,
            Self::Errored => 2,
        }
    }
}
