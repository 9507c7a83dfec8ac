//! CLI commands

pub mod probe;
pub mod scan;
