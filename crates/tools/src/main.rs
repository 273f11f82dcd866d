use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use maze_core::{InputJournal, ReplayResult, replay_to_end};
use tracing::info;

/// Re-run a recorded input journal and print the outcome and snapshot hash.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tools::init_tracing(args.verbose);

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("failed to read journal file: {}", args.journal.display()))?;
    let journal = InputJournal::from_json(&journal_data)
        .with_context(|| format!("failed to parse journal: {}", args.journal.display()))?;
    info!(seed = journal.seed, frames = journal.frames.len(), "replaying journal");

    let result: ReplayResult = replay_to_end(&journal).context("replay failed")?;

    println!("Replay complete.");
    println!("Seed: {}", journal.seed);
    println!("Levels played: {}", result.level_index + 1);
    println!("Final tick: {}", result.final_tick);
    println!("Status: {:?}", result.final_status);
    println!("Snapshot hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
