//! malscan-cli library
//!
//! This module exposes the internal functionality of malscan-cli for testing purposes.

// Make commands module available for internal tests only
#[doc(hidden)]
pub mod commands;

pub mod logging;
pub mod types;
pub use types::{Cli, Commands, EngineArgs, OutputFormat, ScanArgs};
