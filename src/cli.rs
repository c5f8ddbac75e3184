use std::path::PathBuf;

use clap::Parser;

/// Terminal spaceship shooter.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Seed for enemy spawns; the same seed replays the same waves.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG, default `info`).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
