use anyhow::Result;
use clap::Parser;
use maze_core::SimConfig;
use tools::{FuzzReport, fuzz_run, init_tracing};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First seed to fuzz
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of consecutive seeds to run
    #[arg(short, long, default_value_t = 16)]
    runs: u64,
    /// Ticks per run
    #[arg(short, long, default_value_t = 5_000)]
    ticks: u32,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    println!("Fuzzing {} seeds from {} for {} ticks each...", args.runs, args.seed, args.ticks);
    let mut total = FuzzReport::default();
    for seed in args.seed..args.seed.saturating_add(args.runs) {
        let report = fuzz_run(seed, args.ticks, SimConfig::default())?;
        info!(seed, levels = report.levels, wins = report.wins, losses = report.losses, "run ok");
        total.ticks += report.ticks;
        total.levels += report.levels;
        total.wins += report.wins;
        total.losses += report.losses;
    }

    println!(
        "Fuzzing completed: {} ticks, {} levels, {} wins, {} losses.",
        total.ticks, total.levels, total.wins, total.losses
    );
    Ok(())
}
