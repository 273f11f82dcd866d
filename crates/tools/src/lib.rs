//! Shared plumbing for the headless binaries: logging setup and the fuzz driver.

use anyhow::{Result, bail};
use maze_core::movement::footprint_blocked;
use maze_core::{ControlFlags, Game, GameStatus, Outcome, SimConfig};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const FRAME_TIMES: [f32; 4] = [1.0 / 144.0, 1.0 / 60.0, 1.0 / 30.0, 0.1];
const HOLD_TICKS: u32 = 12;

pub fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(fmt::layer().without_time())
        .init();
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FuzzReport {
    pub ticks: u32,
    pub levels: u32,
    pub wins: u32,
    pub losses: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn random_controls(rng: &mut ChaCha8Rng) -> ControlFlags {
    let bits = rng.next_u64();
    ControlFlags {
        up: bits & 1 != 0,
        down: bits & 2 != 0,
        left: bits & 4 != 0,
        right: bits & 8 != 0,
    }
}

/// Drives one run with random held controls and random frame times, retrying every ended
/// level, and fails on the first broken world invariant.
pub fn fuzz_run(seed: u64, ticks: u32, config: SimConfig) -> Result<FuzzReport> {
    let mut game = Game::new(seed, config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut report = FuzzReport { levels: 1, ..FuzzReport::default() };
    let mut controls = ControlFlags::default();

    for tick in 0..ticks {
        if tick % HOLD_TICKS == 0 {
            controls = random_controls(&mut rng);
        }
        let elapsed = choose(&mut rng, &FRAME_TIMES);
        let outcome = game.tick(elapsed, controls).status;
        report.ticks += 1;
        check_invariants(&game).map_err(|err| err.context(format!("seed {seed} tick {tick}")))?;

        if let GameStatus::Ended(outcome) = outcome {
            match outcome {
                Outcome::Win => report.wins += 1,
                Outcome::Lose => report.losses += 1,
            }
            debug!(seed, tick, ?outcome, level = game.level_index(), "level ended");
            game.retry()?;
            report.levels += 1;
        }
    }
    Ok(report)
}

pub fn check_invariants(game: &Game) -> Result<()> {
    let grid = game.grid();
    if let Some(cell) = grid.cells().find(|&cell| grid.on_border(cell) && grid.is_open(cell)) {
        bail!("border cell {cell:?} was opened");
    }
    let player = game.player().planar();
    if footprint_blocked(grid, player, game.config().footprint_half_extent) {
        bail!("player footprint at {player} overlaps a wall");
    }
    let detection = game.detection();
    if detection.remaining() > detection.max() {
        bail!("detection timer {} exceeds its cap {}", detection.remaining(), detection.max());
    }
    if game.status() == GameStatus::Playing && detection.remaining() <= 0.0 {
        bail!("detection timer ran out without ending the level");
    }
    Ok(())
}
