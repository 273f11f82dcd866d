//! Hovering scout that wanders inside the map bounds and detects by proximity.

use glam::{Vec2, Vec3};

use crate::config::SimConfig;
use crate::rng::RngSource;
use crate::types::{Cell, Direction};
use crate::view::LampParams;

pub const SCOUT_HEIGHT: f32 = 3.0;
const LAMP_DROP: f32 = 0.5;
const LAMP_FOV_DEG: f32 = 60.0;
const BOUNDARY_MARGIN: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Scout {
    pub position: Vec3,
    pub move_dir: Direction,
    /// Seconds left before the next free re-choice of heading.
    pub move_time: f32,
}

impl Scout {
    pub fn spawn(cell: Cell) -> Self {
        Self {
            position: cell.center().extend(SCOUT_HEIGHT),
            move_dir: Direction::Up,
            move_time: 0.0,
        }
    }

    pub fn planar(&self) -> Vec2 {
        self.position.truncate()
    }

    /// Scouts fly over walls, so only the map edges constrain them.
    pub fn update(
        &mut self,
        elapsed: f32,
        width: usize,
        height: usize,
        config: &SimConfig,
        rng: &mut RngSource,
    ) {
        let step = self.move_dir.unit() * (config.scout_speed * elapsed);
        self.position.x += step.x;
        self.position.y += step.y;
        self.move_time -= elapsed;

        let mut choices = [Direction::Up; 4];
        let mut open = 0;
        for dir in Direction::ALL {
            if !self.leaves_map(dir, width, height) {
                choices[open] = dir;
                open += 1;
            }
        }
        if open < choices.len() {
            self.rechoose(&choices[..open], config, rng);
        } else if self.move_time <= 0.0 {
            self.rechoose(&Direction::ALL, config, rng);
        }
    }

    pub fn can_see(&self, player: Vec2, config: &SimConfig) -> bool {
        self.planar().distance_squared(player) < config.scout_detect_radius_sq
    }

    pub fn lamp(&self) -> LampParams {
        LampParams {
            position: self.position - Vec3::Z * LAMP_DROP,
            direction: Vec3::NEG_Z,
            fov: LAMP_FOV_DEG.to_radians(),
        }
    }

    /// Whether the scout is past the margin on the side `dir` points at.
    fn leaves_map(&self, dir: Direction, width: usize, height: usize) -> bool {
        let Vec2 { x, y } = self.planar();
        match dir {
            Direction::Left => x < BOUNDARY_MARGIN,
            Direction::Down => y < BOUNDARY_MARGIN,
            Direction::Right => x > width as f32 - BOUNDARY_MARGIN,
            Direction::Up => y > height as f32 - BOUNDARY_MARGIN,
        }
    }

    fn rechoose(&mut self, choices: &[Direction], config: &SimConfig, rng: &mut RngSource) {
        self.move_dir = rng.pick(choices);
        let wait = rng.below(config.scout_move_time_span as usize) as u32;
        self.move_time = (config.scout_move_time_min + wait) as f32;
    }
}
