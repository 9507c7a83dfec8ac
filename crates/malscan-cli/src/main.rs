//! malscan: Malware scanner CLI

use std::process::ExitCode;

use clap::Parser;
use malscan_cli::commands;
use malscan_cli::logging::setup_logging;
use malscan_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Scan(args) => {
            let status = commands::scan::run(&args).await?;
            Ok(ExitCode::from(status.exit_code()))
        }
        Commands::Probe(args) => {
            let available = commands::probe::run(&args).await;
            Ok(if available {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
