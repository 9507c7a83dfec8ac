//! Command types shared between main and library

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use malscan_core::config::{DEFAULT_API_TIMEOUT, DEFAULT_ENGINE_COMMAND};
use malscan_core::{ApiConfig, ConfigError, EngineConfig, ScanConfig, ScanMode};

#[derive(Debug, Parser)]
#[command(name = "malscan")]
#[command(author, version, long_about = None)]
#[command(about = "Malware scanner for files and directory trees")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a file or directory
    Scan(ScanArgs),

    /// Check whether the local scanning engine is installed
    Probe(EngineArgs),
}

/// How the final report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Log lines only
    #[default]
    Text,
    /// Full report as JSON on stdout
    Json,
}

/// Local engine selection
#[derive(Debug, Clone, Args)]
pub struct EngineArgs {
    /// Local scanning engine command
    #[arg(long, env = "MALSCAN_ENGINE", default_value = DEFAULT_ENGINE_COMMAND)]
    pub engine: String,

    /// Extra engine argument, passed before the file path (repeatable)
    #[arg(long = "engine-arg", allow_hyphen_values = true)]
    pub engine_args: Vec<String>,
}

impl EngineArgs {
    #[must_use]
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig::new(&self.engine).with_args(self.engine_args.clone())
    }
}

#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// File or directory to scan
    #[arg(env = "INPUT_PATH")]
    pub path: PathBuf,

    /// Scan mode: local or api
    #[arg(long, env = "INPUT_MODE", default_value = "local", value_parser = parse_mode)]
    pub mode: ScanMode,

    /// Base URL of the scanning API (required with --mode api)
    #[arg(long, env = "INPUT_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// API key (required with --mode api)
    #[arg(long, env = "INPUT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Fail the run when malicious content is found; anything but "false" enables it
    #[arg(
        long,
        env = "INPUT_FAIL_ON_DETECTION",
        default_value = "true",
        action = ArgAction::Set,
        value_parser = parse_flag
    )]
    pub fail_on_detection: bool,

    /// Number of files scanned at once
    #[arg(long, env = "MALSCAN_CONCURRENCY", default_value_t = 1)]
    pub concurrency: usize,

    /// Per-request timeout for the scanning API, in seconds
    #[arg(long, default_value_t = DEFAULT_API_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub engine: EngineArgs,
}

impl ScanArgs {
    /// Build and validate the scan configuration
    ///
    /// # Errors
    /// Returns an error if api mode lacks a base URL or key, or if the
    /// engine command or concurrency is invalid.
    pub fn to_config(&self) -> Result<ScanConfig, ConfigError> {
        let config = match self.mode {
            ScanMode::Local => ScanConfig::local(),
            ScanMode::Api => ScanConfig::api(
                ApiConfig::new(
                    self.api_base_url.clone().unwrap_or_default(),
                    self.api_key.clone().unwrap_or_default(),
                )
                .with_timeout(Duration::from_secs(self.timeout)),
            ),
        }
        .with_engine(self.engine.to_engine_config())
        .with_fail_on_detection(self.fail_on_detection)
        .with_concurrency(self.concurrency);

        config.validate()?;
        Ok(config)
    }
}

/// Unset CI inputs can arrive as empty strings; those mean the default mode
fn parse_mode(value: &str) -> Result<ScanMode, ConfigError> {
    if value.trim().is_empty() {
        return Ok(ScanMode::default());
    }
    value.parse()
}

/// CI inputs arrive as strings; only an explicit "false" disables a flag
fn parse_flag(value: &str) -> Result<bool, String> {
    Ok(!value.trim().eq_ignore_ascii_case("false"))
}
