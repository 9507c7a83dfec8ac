//! Orchestrator module: Runs a scan from root path to overall verdict
//!
//! 1. Enumerate files below the root
//! 2. Build the scanner for the configured mode
//! 3. Scan every file, isolating per-file failures
//! 4. Aggregate all verdicts once

mod report;

use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::{ConfigError, ScanConfig, ScanMode};
use crate::discovery::{DiscoveryError, FileEnumerator};
use crate::engine::{LocalScanner, RemoteScanner, ScanError, Scanner};
use crate::verdict::{aggregate, ScanResult};

pub use report::{FileOutcome, ScanReport};

/// Reasons a scanner could not be built for a run
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to create API client: {0}")]
    Client(#[from] ScanError),
}

/// Drives a single scan run
#[derive(Debug, Clone)]
pub struct ScanOrchestrator {
    config: ScanConfig,
}

impl ScanOrchestrator {
    #[must_use]
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Enumerate the files under `root` and scan them
    ///
    /// # Errors
    /// Returns an error if the file tree cannot be enumerated. Scan
    /// failures never surface here; they are part of the report.
    pub async fn scan_path(&self, root: &Path) -> Result<ScanReport, DiscoveryError> {
        let files = FileEnumerator::new(root).enumerate()?;
        info!("Found {} file(s) under {}", files.len(), root.display());
        Ok(self.run_detailed(&files).await)
    }

    /// Scan `files` and return the overall result
    pub async fn run(&self, files: &[PathBuf]) -> ScanResult {
        self.run_detailed(files).await.result
    }

    /// Scan `files` and keep every per-file outcome
    pub async fn run_detailed(&self, files: &[PathBuf]) -> ScanReport {
        let mode = self.config.mode;

        if files.is_empty() {
            warn!("No files found to scan");
            return ScanReport::new(mode, ScanResult::empty(), Vec::new());
        }

        let scanner = match self.build_scanner().await {
            Ok(scanner) => scanner,
            Err(e) => {
                error!("{} scanning failed: {}", mode, e);
                return ScanReport::new(mode, ScanResult::setup_failed(), Vec::new());
            }
        };

        self.run_with(scanner.as_ref(), files).await
    }

    /// Scan `files` with an already built scanner.
    ///
    /// Up to `concurrency` files are in flight at once; outcomes keep
    /// the order of `files`.
    pub async fn run_with(&self, scanner: &dyn Scanner, files: &[PathBuf]) -> ScanReport {
        info!(
            "Scanning {} file(s) in {} mode ({})...",
            files.len(),
            self.config.mode,
            scanner.name()
        );

        let outcomes: Vec<FileOutcome> = stream::iter(files)
            .map(|path| scan_one(scanner, path))
            .buffered(self.config.concurrency.max(1))
            .collect()
            .await;

        let verdict = aggregate(outcomes.iter().map(FileOutcome::verdict));
        ScanReport::new(
            self.config.mode,
            ScanResult::new(verdict, files.len()),
            outcomes,
        )
    }

    async fn build_scanner(&self) -> Result<Box<dyn Scanner>, SetupError> {
        self.config.validate()?;

        match self.config.mode {
            ScanMode::Local => Ok(Box::new(LocalScanner::detect(&self.config.engine).await)),
            ScanMode::Api => {
                let api = self
                    .config
                    .api
                    .as_ref()
                    .ok_or(ConfigError::MissingApiBaseUrl)?;
                Ok(Box::new(RemoteScanner::new(api)?))
            }
        }
    }
}

async fn scan_one(scanner: &dyn Scanner, path: &Path) -> FileOutcome {
    debug!("Scanning: {}", path.display());

    let result = scanner.scan_file(path).await;
    match &result {
        Ok(verdict) if verdict.is_flagged() => {
            warn!("{}: {}", verdict.as_str().to_uppercase(), path.display());
        }
        Ok(_) => {}
        Err(e) => warn!("Failed to scan {}: {}", path.display(), e),
    }

    FileOutcome::new(path, result)
}
