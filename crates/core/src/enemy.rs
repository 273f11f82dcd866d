//! Closed set of enemy behaviours sharing one update and visibility surface.

pub mod guard;
pub mod scout;

use glam::{Vec2, Vec3};

pub use guard::Guard;
pub use scout::Scout;

use crate::config::SimConfig;
use crate::grid::WallGrid;
use crate::rng::RngSource;
use crate::types::{AgentKind, Direction};
use crate::view::{AgentView, LampParams};

#[derive(Clone, Debug, PartialEq)]
pub enum Enemy {
    Guard(Guard),
    Scout(Scout),
}

impl Enemy {
    pub fn kind(&self) -> AgentKind {
        match self {
            Enemy::Guard(_) => AgentKind::Guard,
            Enemy::Scout(_) => AgentKind::Scout,
        }
    }

    pub fn position(&self) -> Vec3 {
        match self {
            Enemy::Guard(guard) => guard.position,
            Enemy::Scout(scout) => scout.position,
        }
    }

    pub fn facing(&self) -> Direction {
        match self {
            Enemy::Guard(guard) => guard.move_dir,
            Enemy::Scout(scout) => scout.move_dir,
        }
    }

    /// Decision timer: the guard's turn cooldown or the scout's wander countdown.
    pub fn timer(&self) -> f32 {
        match self {
            Enemy::Guard(guard) => guard.turned,
            Enemy::Scout(scout) => scout.move_time,
        }
    }

    pub fn can_see_player(&self, grid: &WallGrid, player: Vec2, config: &SimConfig) -> bool {
        match self {
            Enemy::Guard(guard) => guard.can_see(grid, player, config),
            Enemy::Scout(scout) => scout.can_see(player, config),
        }
    }

    pub fn update(
        &mut self,
        elapsed: f32,
        grid: &WallGrid,
        config: &SimConfig,
        rng: &mut RngSource,
    ) {
        match self {
            Enemy::Guard(guard) => guard.update(elapsed, grid, config, rng),
            Enemy::Scout(scout) => {
                scout.update(elapsed, grid.width(), grid.height(), config, rng)
            }
        }
    }

    pub fn lamp(&self, config: &SimConfig) -> LampParams {
        match self {
            Enemy::Guard(guard) => guard.lamp(config),
            Enemy::Scout(scout) => scout.lamp(),
        }
    }

    pub fn view(&self) -> AgentView {
        AgentView { kind: self.kind(), position: self.position(), facing: self.facing() }
    }
}
