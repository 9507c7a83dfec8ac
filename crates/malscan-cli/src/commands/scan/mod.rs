//! Scan command: Scan a file or directory and report the verdict
//!
//! 1. Resolve and validate inputs
//! 2. Run the orchestrator
//! 3. Publish outputs and the summary
//! 4. Decide the run status

mod outputs;
mod summary;

use anyhow::{ensure, Context, Result};
use malscan_core::{RunStatus, ScanOrchestrator, ScanReport, ScanResult};
use tracing::{error, info};

use crate::types::{OutputFormat, ScanArgs};

pub use outputs::CiTargets;
pub use summary::render_summary;

/// Run the scan command
///
/// # Errors
/// Returns an error if the inputs are invalid, the path does not exist,
/// the tree cannot be enumerated, or outputs cannot be written.
pub async fn run(args: &ScanArgs) -> Result<RunStatus> {
    run_with_targets(args, &CiTargets::from_env()).await
}

/// Run the scan command, writing CI outputs to the given targets
///
/// # Errors
/// Same as [`run`].
pub async fn run_with_targets(args: &ScanArgs, targets: &CiTargets) -> Result<RunStatus> {
    info!("Starting malware scan...");
    info!("Mode: {}", args.mode);
    info!("Path: {}", args.path.display());

    let config = args.to_config()?;
    ensure!(
        args.path.exists(),
        "Path does not exist: {}",
        args.path.display()
    );

    let fail_on_detection = config.fail_on_detection;
    let report = ScanOrchestrator::new(config)
        .scan_path(&args.path)
        .await
        .with_context(|| format!("Failed to enumerate files under {}", args.path.display()))?;

    publish(&report, args.format, targets)?;

    let status = RunStatus::decide(&report.result, fail_on_detection);
    log_status(status, &report.result);
    Ok(status)
}

fn publish(report: &ScanReport, format: OutputFormat, targets: &CiTargets) -> Result<()> {
    targets.write_outputs(&report.result)?;
    targets.write_summary(&render_summary(report))?;

    log_scan_summary(&report.result);

    if format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{json}");
    }
    Ok(())
}

fn log_scan_summary(result: &ScanResult) {
    info!("=== Scan Complete ===");
    info!("Verdict: {}", result.verdict);
    info!("Files Scanned: {}", result.scanned_files);
}

fn log_status(status: RunStatus, result: &ScanResult) {
    match status {
        RunStatus::Passed => {}
        RunStatus::Detected => error!(
            "Malicious content detected! Scanned {} file(s).",
            result.scanned_files
        ),
        RunStatus::Errored => error!("Scan completed with errors. Check logs for details."),
    }
}
