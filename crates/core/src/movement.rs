//! Continuous movement resolved against the discrete wall grid.
//! This module exists so the player and guards share one footprint test.
//! It does not choose where anything wants to go.

use glam::{Vec2, Vec3};

use crate::grid::WallGrid;
use crate::types::{ControlFlags, Direction};

/// Whether any corner of the square footprint centred on `center` rounds into a wall.
pub fn footprint_blocked(grid: &WallGrid, center: Vec2, half_extent: f32) -> bool {
    [
        Vec2::new(half_extent, half_extent),
        Vec2::new(half_extent, -half_extent),
        Vec2::new(-half_extent, half_extent),
        Vec2::new(-half_extent, -half_extent),
    ]
    .into_iter()
    .any(|corner| grid.is_wall_at(center + corner))
}

/// Applies `delta` in the maze plane in sub-steps no longer than `half_extent`, so a long
/// frame cannot carry the footprint across a wall. Stops at the first blocked sub-step,
/// keeping the progress made before it. Returns whether the whole move stuck.
pub fn try_shift(grid: &WallGrid, position: &mut Vec3, delta: Vec2, half_extent: f32) -> bool {
    let steps = (delta.length() / half_extent).ceil().max(1.0) as u32;
    let sub_delta = delta / steps as f32;
    for _ in 0..steps {
        let previous = *position;
        position.x += sub_delta.x;
        position.y += sub_delta.y;
        if footprint_blocked(grid, position.truncate(), half_extent) {
            *position = previous;
            return false;
        }
    }
    true
}

/// Each held flag is resolved as its own axis move, in the order right, left, up, down,
/// so a blocked axis does not stop sliding along the other.
pub fn move_player(
    grid: &WallGrid,
    position: &mut Vec3,
    controls: ControlFlags,
    step: f32,
    half_extent: f32,
) {
    let held = [
        (controls.right, Direction::Right),
        (controls.left, Direction::Left),
        (controls.up, Direction::Up),
        (controls.down, Direction::Down),
    ];
    for (pressed, dir) in held {
        if pressed {
            try_shift(grid, position, dir.unit() * step, half_extent);
        }
    }
}

/// Direction-restricted move used by agents that only ever travel along their heading.
pub fn move_along(
    grid: &WallGrid,
    position: &mut Vec3,
    dir: Direction,
    step: f32,
    half_extent: f32,
) -> bool {
    try_shift(grid, position, dir.unit() * step, half_extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn corridor() -> WallGrid {
        let mut grid = WallGrid::solid(8, 5);
        for x in 1..=5 {
            grid.open(Cell::new(x, 2));
        }
        grid
    }

    #[test]
    fn blocked_axis_is_reverted() {
        let grid = corridor();
        let mut position = Vec3::new(3.0, 2.0, 0.75);
        assert!(!try_shift(&grid, &mut position, Vec2::new(0.0, 0.2), 0.25));
        assert_eq!(position, Vec3::new(3.0, 2.0, 0.75));
    }

    #[test]
    fn diagonal_input_slides_along_the_corridor() {
        let grid = corridor();
        let mut position = Vec3::new(3.0, 2.0, 0.75);
        let controls = ControlFlags { up: true, right: true, ..ControlFlags::default() };
        move_player(&grid, &mut position, controls, 0.25, 0.25);
        assert!((position.x - 3.25).abs() < 1e-6);
        assert_eq!(position.y, 2.0);
    }

    #[test]
    fn pushing_into_a_wall_for_a_second_never_crosses_it() {
        let grid = corridor();
        let mut position = Vec3::new(5.0, 2.0, 0.75);
        let controls = ControlFlags { right: true, ..ControlFlags::default() };
        let elapsed = 1.0 / 60.0;
        for _ in 0..60 {
            move_player(&grid, &mut position, controls, 3.0 * elapsed, 0.25);
            assert!(position.x + 0.25 < 5.5, "footprint entered the wall at x={}", position.x);
        }
        assert!(position.x > 5.0, "player should still close in on the wall");
    }

    #[test]
    fn long_step_stops_at_the_wall_instead_of_reverting() {
        let grid = corridor();
        let mut position = Vec3::new(3.0, 2.0, 0.75);
        assert!(!try_shift(&grid, &mut position, Vec2::new(0.0, 1.9), 0.25));
        assert!(position.y > 2.0 && position.y < 2.25, "stopped at y={}", position.y);
        assert_eq!(Cell::containing(position.truncate()), Cell::new(3, 2));
    }

    #[test]
    fn long_step_cannot_jump_a_one_cell_wall() {
        let mut grid = corridor();
        for x in 1..=5 {
            grid.open(Cell::new(x, 4));
        }
        let mut position = Vec3::new(3.0, 2.0, 0.75);
        let controls = ControlFlags { up: true, ..ControlFlags::default() };
        move_player(&grid, &mut position, controls, 2.1, 0.25);
        assert_eq!(Cell::containing(position.truncate()), Cell::new(3, 2));
    }

    #[test]
    fn move_along_reports_success() {
        let grid = corridor();
        let mut position = Vec3::new(1.0, 2.0, 0.75);
        assert!(move_along(&grid, &mut position, Direction::Left, 0.2, 0.25));
        assert!(!move_along(&grid, &mut position, Direction::Left, 0.2, 0.25));
    }
}
