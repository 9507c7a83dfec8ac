//! malscan-core: Core library for malware scan orchestration
//!
//! Walks a file or directory tree, scans every file with either a local
//! engine or a remote scanning API, and reduces the per-file verdicts into
//! one overall verdict.
//!
//! # Scan modes
//!
//! - **local** - an external engine command, or a heuristic fallback when
//!   the engine is not installed
//! - **api** - uploads each file to `POST {base_url}/scan`

pub mod config;
pub mod discovery;
pub mod engine;
pub mod orchestrator;
pub mod verdict;

// Re-export commonly used types
pub use config::{ApiConfig, ConfigError, EngineConfig, ScanConfig, ScanMode};
pub use discovery::{DiscoveryError, FileEnumerator};
pub use engine::{Detection, LocalScanner, RemoteScanner, ScanError, Scanner};
pub use orchestrator::{FileOutcome, ScanOrchestrator, ScanReport, SetupError};
pub use verdict::{aggregate, ParseVerdictError, RunStatus, ScanResult, Verdict};
