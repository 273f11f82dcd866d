//! Hand-built levels for the `game` test suites, bypassing generation.

use super::*;
use crate::enemy::Guard;

pub(super) fn open_room(width: usize, height: usize) -> WallGrid {
    let mut grid = WallGrid::solid(width, height);
    for y in 1..(height as i32 - 1) {
        for x in 1..(width as i32 - 1) {
            grid.open(Cell::new(x, y));
        }
    }
    grid
}

/// An 8x5 grid with a single open row at y=2 spanning x=1..=5.
pub(super) fn corridor() -> WallGrid {
    let mut grid = WallGrid::solid(8, 5);
    for x in 1..=5 {
        grid.open(Cell::new(x, 2));
    }
    grid
}

pub(super) fn scenario(
    grid: WallGrid,
    player: Cell,
    goal: Option<Cell>,
    config: SimConfig,
) -> Game {
    let goal = goal.map(|cell| DeadEnd { cell, depth: 1 });
    let detection = DetectionTimer::new(config.detection_grace);
    Game {
        run_seed: 0,
        config,
        level_index: 0,
        level_seed: 0,
        tick: 0,
        rng: RngSource::new(0),
        grid,
        start: player,
        dead_ends: goal.into_iter().collect(),
        goal,
        player: Player::spawn(player),
        enemies: SlotMap::with_key(),
        detection,
        status: GameStatus::Playing,
    }
}

pub(super) fn guard_facing(cell: Cell, dir: Direction) -> Enemy {
    Enemy::Guard(Guard { move_dir: dir, ..Guard::spawn(cell) })
}
