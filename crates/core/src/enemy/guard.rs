//! Corridor-walking guard with a forward vision cone.

use glam::{Vec2, Vec3};

use crate::config::SimConfig;
use crate::grid::WallGrid;
use crate::movement::move_along;
use crate::rng::RngSource;
use crate::types::{Cell, Direction};
use crate::view::LampParams;

pub const GUARD_HEIGHT: f32 = 0.75;
const LAMP_SETBACK: f32 = 0.17;
const LOOK_AHEAD: f32 = 0.5;
const SIGHT_SAMPLES: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Guard {
    pub position: Vec3,
    pub move_dir: Direction,
    /// Cooldown before the next optional turn may be considered.
    pub turned: f32,
}

impl Guard {
    pub fn spawn(cell: Cell) -> Self {
        Self {
            position: cell.center().extend(GUARD_HEIGHT),
            move_dir: Direction::Up,
            turned: 0.0,
        }
    }

    pub fn planar(&self) -> Vec2 {
        self.position.truncate()
    }

    pub fn update(
        &mut self,
        elapsed: f32,
        grid: &WallGrid,
        config: &SimConfig,
        rng: &mut RngSource,
    ) {
        move_along(
            grid,
            &mut self.position,
            self.move_dir,
            config.guard_speed * elapsed,
            config.footprint_half_extent,
        );
        self.turned -= elapsed;

        // Both turn paths go through `set_heading`, which snaps the guard onto its lane.
        if grid.is_wall(self.cell_ahead(self.move_dir)) {
            let turn = rng.pick(&self.move_dir.perpendiculars());
            self.set_heading(turn);
            return;
        }

        let tolerance =
            (config.guard_center_tolerance_rate * elapsed).min(config.guard_center_tolerance_max);
        if self.turned <= 0.0 && self.near_cell_center(tolerance) && rng.coin_flip() {
            let target = rng.pick(&self.move_dir.perpendiculars());
            if grid.is_open(self.cell_ahead(target)) {
                self.set_heading(target);
            }
            self.turned = config.guard_turn_cooldown;
        }
    }

    /// Cone, range, then sampled occlusion along the guard-to-player segment.
    pub fn can_see(&self, grid: &WallGrid, player: Vec2, config: &SimConfig) -> bool {
        let origin = self.planar();
        let to_player = player - origin;
        let distance = to_player.length();
        if distance == 0.0 {
            return true;
        }
        if distance >= config.guard_view_distance {
            return false;
        }
        let cos_angle = (to_player.dot(self.move_dir.unit()) / distance).clamp(-1.0, 1.0);
        if cos_angle.acos() >= config.guard_view_half_angle_deg.to_radians() {
            return false;
        }
        (0..SIGHT_SAMPLES).all(|i| {
            let t = i as f32 / SIGHT_SAMPLES as f32;
            !grid.is_wall_at(origin + to_player * t)
        })
    }

    pub fn lamp(&self, config: &SimConfig) -> LampParams {
        LampParams {
            position: self.position - self.move_dir.unit3() * LAMP_SETBACK,
            direction: self.move_dir.unit3(),
            fov: 2.0 * config.guard_view_half_angle_deg.to_radians(),
        }
    }

    fn cell_ahead(&self, dir: Direction) -> Cell {
        Cell::containing(self.planar() + dir.unit() * LOOK_AHEAD)
    }

    fn near_cell_center(&self, tolerance: f32) -> bool {
        let x = self.position.x;
        let y = self.position.y;
        (x - x.round()).abs() < tolerance && (y - y.round()).abs() < tolerance
    }

    /// Turning moves the guard to the nearest cell centre along the axis it was travelling,
    /// a jump of at most one frame's step, so later centre checks and lamps line up with the
    /// corridor it is entering.
    fn set_heading(&mut self, dir: Direction) {
        if self.move_dir.is_vertical() {
            self.position.y = self.position.y.round();
        } else {
            self.position.x = self.position.x.round();
        }
        self.move_dir = dir;
    }
}
