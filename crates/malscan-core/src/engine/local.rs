//! Local scanner: engine command with heuristic fallback

use std::path::Path;

use async_trait::async_trait;
use tracing::{info, warn};

use super::{EngineCommand, HeuristicScanner, ScanError, Scanner};
use crate::config::EngineConfig;
use crate::verdict::Verdict;

/// Backend chosen once, when the scanner is built
#[derive(Debug, Clone)]
pub enum LocalBackend {
    Engine(EngineCommand),
    Heuristic(HeuristicScanner),
}

/// Scans files on this machine
#[derive(Debug, Clone)]
pub struct LocalScanner {
    backend: LocalBackend,
}

impl LocalScanner {
    /// Probe for the configured engine and fall back to the heuristic
    /// scanner when it cannot be launched.
    pub async fn detect(config: &EngineConfig) -> Self {
        let engine = EngineCommand::new(config.clone());
        if engine.probe().await {
            info!("Using local engine `{}`", engine.command());
            return Self::with_backend(LocalBackend::Engine(engine));
        }

        warn!(
            "Engine `{}` not found. Using heuristic scanner; real malware detection is not active.",
            engine.command()
        );
        Self::heuristic()
    }

    #[must_use]
    pub fn with_backend(backend: LocalBackend) -> Self {
        Self { backend }
    }

    /// Scanner that only uses the heuristic fallback
    #[must_use]
    pub fn heuristic() -> Self {
        Self::with_backend(LocalBackend::Heuristic(HeuristicScanner))
    }

    #[must_use]
    pub fn backend(&self) -> &LocalBackend {
        &self.backend
    }

    #[must_use]
    pub fn is_heuristic(&self) -> bool {
        matches!(self.backend, LocalBackend::Heuristic(_))
    }
}

#[async_trait]
impl Scanner for LocalScanner {
    async fn scan_file(&self, path: &Path) -> Result<Verdict, ScanError> {
        let detection = match &self.backend {
            LocalBackend::Engine(engine) => engine.inspect(path).await?,
            LocalBackend::Heuristic(heuristic) => heuristic.inspect(path).await?,
        };
        Ok(detection.verdict())
    }

    fn name(&self) -> &'static str {
        match self.backend {
            LocalBackend::Engine(_) => "engine",
            LocalBackend::Heuristic(_) => "heuristic",
        }
    }
}
