//! CI step outputs and job summary files

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use malscan_core::ScanResult;

/// Environment variable naming the step output file
pub const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Environment variable naming the job summary file
pub const SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Files the CI runner collects after the step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiTargets {
    pub output_file: Option<PathBuf>,
    pub summary_file: Option<PathBuf>,
}

impl CiTargets {
    /// Read the target files from the runner environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            output_file: std::env::var_os(OUTPUT_ENV).map(PathBuf::from),
            summary_file: std::env::var_os(SUMMARY_ENV).map(PathBuf::from),
        }
    }

    /// Set the `verdict` and `scanned_files` outputs
    ///
    /// # Errors
    /// Returns an error if the output file cannot be written.
    pub fn write_outputs(&self, result: &ScanResult) -> Result<()> {
        let Some(path) = &self.output_file else {
            tracing::debug!(
                "verdict={} scanned_files={}",
                result.verdict,
                result.scanned_files
            );
            return Ok(());
        };

        let lines = format!(
            "verdict={}\nscanned_files={}\n",
            result.verdict, result.scanned_files
        );
        append(path, &lines)
    }

    /// Append the rendered summary to the job summary
    ///
    /// # Errors
    /// Returns an error if the summary file cannot be written.
    pub fn write_summary(&self, markdown: &str) -> Result<()> {
        match &self.summary_file {
            Some(path) => append(path, markdown),
            None => Ok(()),
        }
    }
}

fn append(path: &Path, contents: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))
}
