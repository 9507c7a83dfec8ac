//! Tests for LocalScanner backend selection and engine execution

#![allow(clippy::expect_used, clippy::panic)]

use crate::config::EngineConfig;
use crate::engine::{LocalBackend, LocalScanner, ScanError, Scanner};
use crate::verdict::Verdict;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MISSING_ENGINE: &str = "malscan-test-engine-that-does-not-exist";

/// Engine config running a shell script through `sh`
#[cfg(unix)]
fn script_engine(dir: &Path, body: &str) -> EngineConfig {
    let script = dir.join("engine.sh");
    fs::write(&script, body).expect("Failed to write engine script");
    EngineConfig::new("sh").with_args(vec![script.display().to_string()])
}

fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write file");
    path
}

// ============================================================================
// Backend selection
// ============================================================================

#[tokio::test]
async fn test_detect_falls_back_to_heuristic_when_engine_missing() {
    let scanner = LocalScanner::detect(&EngineConfig::new(MISSING_ENGINE)).await;

    assert!(scanner.is_heuristic());
    assert_eq!(scanner.name(), "heuristic");
}

#[cfg(unix)]
#[tokio::test]
async fn test_detect_uses_engine_when_available() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = script_engine(temp_dir.path(), "echo '{}'\n");

    let scanner = LocalScanner::detect(&config).await;

    assert!(!scanner.is_heuristic());
    assert_eq!(scanner.name(), "engine");
    assert!(matches!(scanner.backend(), LocalBackend::Engine(e) if e.command() == "sh"));
}

// ============================================================================
// Heuristic backend
// ============================================================================

#[tokio::test]
async fn test_heuristic_flags_binary_extension() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = write_file(temp_dir.path(), "malware.exe", b"MZ");

    let verdict = LocalScanner::heuristic()
        .scan_file(&file)
        .await
        .expect("Failed to scan");

    assert_eq!(verdict, Verdict::Suspicious);
}

#[tokio::test]
async fn test_heuristic_clean_text_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = write_file(temp_dir.path(), "notes.txt", b"hello");

    let verdict = LocalScanner::heuristic()
        .scan_file(&file)
        .await
        .expect("Failed to scan");

    assert_eq!(verdict, Verdict::Clean);
}

// ============================================================================
// Engine backend
// ============================================================================

#[cfg(unix)]
#[tokio::test]
async fn test_engine_report_is_mapped_to_verdict() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = script_engine(
        temp_dir.path(),
        r#"case "$1" in
  *eicar*) echo '{"malicious": true, "signature": "EICAR"}' ;;
  *.bin) echo '{"suspicious": true}' ;;
  *) echo '{"malicious": false, "suspicious": false}' ;;
esac
"#,
    );
    let scanner = LocalScanner::detect(&config).await;

    let eicar = write_file(temp_dir.path(), "eicar.com", b"X5O!P%@AP");
    let blob = write_file(temp_dir.path(), "blob.bin", b"\x00\x01");
    let text = write_file(temp_dir.path(), "readme.txt", b"hi");

    assert_eq!(
        scanner.scan_file(&eicar).await.expect("Failed to scan"),
        Verdict::Malicious
    );
    assert_eq!(
        scanner.scan_file(&blob).await.expect("Failed to scan"),
        Verdict::Suspicious
    );
    assert_eq!(
        scanner.scan_file(&text).await.expect("Failed to scan"),
        Verdict::Clean
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_engine_failure_status_is_scan_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = script_engine(
        temp_dir.path(),
        "if [ \"$1\" = \"--version\" ]; then exit 0; fi\necho 'database missing' >&2\nexit 2\n",
    );
    let scanner = LocalScanner::detect(&config).await;
    let file = write_file(temp_dir.path(), "file.txt", b"data");

    let result = scanner.scan_file(&file).await;

    match result {
        Err(ScanError::Engine { command, reason }) => {
            assert_eq!(command, "sh");
            assert!(reason.contains("database missing"), "reason was {reason}");
        }
        other => panic!("expected engine error, got {other:?}"),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_engine_garbage_output_is_scan_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = script_engine(temp_dir.path(), "echo 'all good'\n");
    let scanner = LocalScanner::detect(&config).await;
    let file = write_file(temp_dir.path(), "file.txt", b"data");

    let result = scanner.scan_file(&file).await;

    assert!(matches!(result, Err(ScanError::EngineOutput(_))));
}
