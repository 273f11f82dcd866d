//! Level state owned by the simulation: grid, goal, agents, detection and status.

mod bootstrap;
mod detection;
mod frame;
mod hash;
mod tick;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

use glam::{Vec2, Vec3};
use slotmap::SlotMap;

pub use detection::DetectionTimer;
pub use frame::{EndChoice, EndSignal};

use crate::config::SimConfig;
use crate::enemy::Enemy;
use crate::grid::WallGrid;
use crate::mapgen::DeadEnd;
use crate::rng::RngSource;
use crate::types::{Cell, Direction, EnemyId, GameStatus};

pub const PLAYER_HEIGHT: f32 = 0.75;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Vec3,
    /// Last heading the player moved along; aims the player lamp.
    pub facing: Direction,
}

impl Player {
    pub fn spawn(cell: Cell) -> Self {
        Self { position: cell.center().extend(PLAYER_HEIGHT), facing: Direction::Up }
    }

    pub fn planar(&self) -> Vec2 {
        self.position.truncate()
    }
}

pub struct Game {
    run_seed: u64,
    config: SimConfig,
    level_index: u32,
    level_seed: u64,
    tick: u64,
    rng: RngSource,
    grid: WallGrid,
    start: Cell,
    dead_ends: Vec<DeadEnd>,
    goal: Option<DeadEnd>,
    player: Player,
    enemies: SlotMap<EnemyId, Enemy>,
    detection: DetectionTimer,
    status: GameStatus,
}

impl Game {
    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    /// Seed of the generation attempt that produced the current level.
    pub fn level_seed(&self) -> u64 {
        self.level_seed
    }

    pub fn level_index(&self) -> u32 {
        self.level_index
    }

    /// Ticks simulated on the current level.
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Option<DeadEnd> {
        self.goal
    }

    pub fn dead_ends(&self) -> &[DeadEnd] {
        &self.dead_ends
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> impl Iterator<Item = (EnemyId, &Enemy)> + '_ {
        self.enemies.iter()
    }

    pub fn detection(&self) -> &DetectionTimer {
        &self.detection
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }
}
