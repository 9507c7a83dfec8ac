//! Scan configuration
//!
//! Built once per invocation from caller input and validated before any
//! file is touched.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default per-request timeout for the remote scan API
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(60);

/// Default command for the local scanning engine
pub const DEFAULT_ENGINE_COMMAND: &str = "pompelmi";

/// Errors raised while validating a scan configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid mode: {0}. Must be 'local' or 'api'")]
    InvalidMode(String),

    #[error("api_base_url is required when mode=api")]
    MissingApiBaseUrl,

    #[error("api_key is required when mode=api")]
    MissingApiKey,

    #[error("engine command must not be empty")]
    EmptyEngineCommand,

    #[error("concurrency must be at least 1")]
    InvalidConcurrency,

    #[error("API timeout must be greater than zero")]
    InvalidTimeout,
}

/// How files are scanned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Local engine, or the heuristic fallback
    #[default]
    Local,
    /// Remote scanning API
    Api,
}

impl ScanMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Api => "api",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "api" => Ok(Self::Api),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

/// Connection settings for the remote scan API
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Create a new API configuration with the default timeout
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_API_TIMEOUT,
        }
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the scan endpoint
    #[must_use]
    pub fn scan_url(&self) -> String {
        format!("{}/scan", self.base_url.trim_end_matches('/'))
    }
}

// The key never ends up in logs.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Command line of the local scanning engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub command: String,
    pub args: Vec<String>,
}

impl EngineConfig {
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    /// Arguments passed before the file path
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE_COMMAND)
    }
}

/// Everything a single scan run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub mode: ScanMode,
    pub api: Option<ApiConfig>,
    pub engine: EngineConfig,
    pub fail_on_detection: bool,
    pub concurrency: usize,
}

impl ScanConfig {
    /// Local-mode configuration with defaults
    #[must_use]
    pub fn local() -> Self {
        Self {
            mode: ScanMode::Local,
            api: None,
            engine: EngineConfig::default(),
            fail_on_detection: true,
            concurrency: 1,
        }
    }

    /// Api-mode configuration for the given endpoint
    #[must_use]
    pub fn api(api: ApiConfig) -> Self {
        Self {
            mode: ScanMode::Api,
            api: Some(api),
            ..Self::local()
        }
    }

    /// Set the local engine command
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    #[must_use]
    pub fn with_fail_on_detection(mut self, fail_on_detection: bool) -> Self {
        self.fail_on_detection = fail_on_detection;
        self
    }

    /// Set how many files may be scanned at once
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Check the invariants that must hold before scanning starts
    ///
    /// # Errors
    /// Returns an error if api mode lacks a base URL or key or has a zero
    /// timeout, if the engine command is empty, or if concurrency is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency);
        }

        match self.mode {
            ScanMode::Local => {
                if self.engine.command.trim().is_empty() {
                    return Err(ConfigError::EmptyEngineCommand);
                }
            }
            ScanMode::Api => {
                let api = self.api.as_ref().ok_or(ConfigError::MissingApiBaseUrl)?;
                if api.base_url.trim().is_empty() {
                    return Err(ConfigError::MissingApiBaseUrl);
                }
                if api.api_key.is_empty() {
                    return Err(ConfigError::MissingApiKey);
                }
                if api.timeout.is_zero() {
                    return Err(ConfigError::InvalidTimeout);
                }
            }
        }

        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::local()
    }
}
