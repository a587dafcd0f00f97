mod animator;
mod cli;
mod config;
mod device;
mod error;
mod frame;
mod logging;
#[cfg(test)]
mod test_utils;

use animator::Animator;
use clap::Parser;
use cli::Cli;
use config::{AnimationConfig, BusConfig};
use device::BusSession;

fn main() -> anyhow::Result<()> {
    logging::setup();

    // Argument errors exit here, before the bus is touched.
    let cli = Cli::parse();

    let session = BusSession::open(BusConfig::DEFAULT)?;
    let mut animator = Animator::new(session, AnimationConfig::DEFAULT)?;

    let summary = animator.run(cli.count)?;
    log::info!(
        "Sent {} frames, {} register writes failed",
        summary.frames,
        summary.failed_writes
    );

    Ok(())
}
