//! Level construction: seeded generation attempts, then agent placement.
//! This module exists to keep level setup apart from the per-frame tick.
//! It does not advance the simulation once a level is live.

use slotmap::SlotMap;
use tracing::{debug, info, trace, warn};

use super::*;
use crate::enemy::{Guard, Scout};
use crate::mapgen::{GeneratedMaze, MazeGenerator};
use crate::rng::derive_level_seed;
use crate::types::GameError;

const SCOUT_ROW: i32 = 10;
const SCOUT_FIRST_COLUMN: i32 = 5;
const SCOUT_SPACING: i32 = 2;

/// Everything a freshly generated level needs, built before it replaces the old one.
struct Level {
    seed: u64,
    rng: RngSource,
    maze: GeneratedMaze,
    enemies: SlotMap<EnemyId, Enemy>,
}

impl Game {
    pub fn new(seed: u64, config: SimConfig) -> Result<Self, GameError> {
        config.validate()?;
        let level = generate_level(seed, 0, &config)?;
        Ok(Self::from_level(seed, config, 0, level))
    }

    /// Rebuilds the level after it has ended. The run seed is kept and the level index advances.
    pub fn retry(&mut self) -> Result<(), GameError> {
        if !self.status.is_terminal() {
            return Err(GameError::NotTerminal);
        }
        self.regenerate()
    }

    /// Tears down and rebuilds grid, goal and agents in one step.
    pub fn regenerate(&mut self) -> Result<(), GameError> {
        let level_index = self.level_index + 1;
        let level = generate_level(self.run_seed, level_index, &self.config)?;
        info!(run_seed = self.run_seed, level_index, level_seed = level.seed, "level regenerated");
        *self = Self::from_level(self.run_seed, self.config.clone(), level_index, level);
        Ok(())
    }

    fn from_level(run_seed: u64, config: SimConfig, level_index: u32, level: Level) -> Self {
        let Level { seed, rng, maze, enemies } = level;
        let GeneratedMaze { grid, start, dead_ends, goal } = maze;
        let detection = DetectionTimer::new(config.detection_grace);
        Self {
            run_seed,
            level_index,
            level_seed: seed,
            tick: 0,
            rng,
            grid,
            start,
            dead_ends,
            goal,
            player: Player::spawn(start),
            enemies,
            detection,
            status: GameStatus::Playing,
            config,
        }
    }
}

fn generate_level(
    run_seed: u64,
    level_index: u32,
    config: &SimConfig,
) -> Result<Level, GameError> {
    let generator = MazeGenerator::from_config(config);
    for attempt in 0..config.max_generation_attempts {
        let seed = derive_level_seed(run_seed, level_index, attempt);
        let mut rng = RngSource::new(seed);
        let maze = generator.generate(&mut rng);
        if let Err(defect) = maze.validate() {
            warn!(level_index, attempt, seed, %defect, "rejected generated maze");
            continue;
        }
        debug!(
            level_index,
            attempt,
            seed,
            open_cells = maze.grid.open_cells().count(),
            dead_ends = maze.dead_ends.len(),
            goal_depth = maze.goal.map(|goal| goal.depth),
            "generated maze"
        );
        trace!(level_index, "maze layout\n{}", maze.grid.render_ascii());
        let enemies = spawn_enemies(&maze, config, &mut rng);
        return Ok(Level { seed, rng, maze, enemies });
    }
    Err(GameError::GenerationExhausted { attempts: config.max_generation_attempts })
}

/// Guards take random dead ends without replacement; scouts line up on a fixed row.
/// Guards are inserted first so they also update first.
fn spawn_enemies(
    maze: &GeneratedMaze,
    config: &SimConfig,
    rng: &mut RngSource,
) -> SlotMap<EnemyId, Enemy> {
    let mut enemies = SlotMap::with_key();
    let mut pool = maze.dead_ends.clone();
    for guard in 0..config.guard_count {
        if pool.is_empty() {
            warn!(guard, requested = config.guard_count, "no dead end left for guard");
            continue;
        }
        let dead_end = pool.remove(rng.below(pool.len()));
        enemies.insert(Enemy::Guard(Guard::spawn(dead_end.cell)));
    }

    let max_x = maze.grid.width() as i32 - 2;
    let row = SCOUT_ROW.min(maze.grid.height() as i32 - 2);
    for index in 0..config.scout_count as i32 {
        let column = (SCOUT_FIRST_COLUMN + SCOUT_SPACING * index).min(max_x);
        enemies.insert(Enemy::Scout(Scout::spawn(Cell::new(column, row))));
    }
    enemies
}
