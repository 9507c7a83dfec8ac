//! External engine process
//!
//! The engine is run once per file as `<command> <args...> <path>` and
//! must print a JSON detection report on stdout.

use std::path::Path;
use std::process::Stdio;

use super::{Detection, ScanError};
use crate::config::EngineConfig;

/// A locally installed scanning engine
#[derive(Debug, Clone)]
pub struct EngineCommand {
    config: EngineConfig,
}

impl EngineCommand {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Check whether the engine can be launched at all.
    ///
    /// Runs `<command> --version`; any exit status counts as available,
    /// only a failure to spawn means the engine is missing.
    pub async fn probe(&self) -> bool {
        let status = async_process::Command::new(&self.config.command)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await;

        match status {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("Engine `{}` unavailable: {}", self.config.command, e);
                false
            }
        }
    }

    /// Run the engine against one file
    ///
    /// # Errors
    /// Returns an error if the process cannot be spawned, exits with a
    /// failure status, or prints something that is not a detection report.
    pub async fn inspect(&self, path: &Path) -> Result<Detection, ScanError> {
        let output = async_process::Command::new(&self.config.command)
            .args(&self.config.args)
            .arg(path)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| self.failure(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.failure(format!("{} ({})", output.status, stderr.trim())));
        }

        parse_report(&output.stdout)
    }

    /// Engine command name
    #[must_use]
    pub fn command(&self) -> &str {
        &self.config.command
    }

    fn failure(&self, reason: String) -> ScanError {
        ScanError::Engine {
            command: self.config.command.clone(),
            reason,
        }
    }
}

/// Parse an engine's stdout into a detection
pub(crate) fn parse_report(stdout: &[u8]) -> Result<Detection, ScanError> {
    serde_json::from_slice(stdout).map_err(ScanError::EngineOutput)
}
