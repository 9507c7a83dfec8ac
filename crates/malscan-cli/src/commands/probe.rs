//! Probe command: Report whether the local engine can be launched

use malscan_core::engine::EngineCommand;
use tracing::{info, warn};

use crate::types::EngineArgs;

/// Run the probe command. Returns whether the engine is available.
pub async fn run(args: &EngineArgs) -> bool {
    let engine = EngineCommand::new(args.to_engine_config());

    if engine.probe().await {
        info!("Engine `{}` is available", engine.command());
        println!("available");
        true
    } else {
        warn!(
            "Engine `{}` not found; local scans will use the heuristic scanner",
            engine.command()
        );
        println!("unavailable");
        false
    }
}
