//! One fixed-order simulation step: player, enemies, detection, then win.

use tracing::info;

use super::*;
use crate::movement::move_player;
use crate::types::{ControlFlags, Outcome, TickReport};

/// Negative and non-finite frame times would corrupt every timer; they simulate as a zero step.
fn sanitize_elapsed(elapsed: f32) -> f32 {
    if elapsed.is_finite() && elapsed > 0.0 { elapsed } else { 0.0 }
}

impl Game {
    pub fn tick(&mut self, elapsed: f32, controls: ControlFlags) -> TickReport {
        if self.status.is_terminal() {
            return TickReport { seen: false, status: self.status };
        }
        let elapsed = sanitize_elapsed(elapsed);
        self.tick += 1;

        self.steer_player(controls, elapsed);

        let player = self.player.planar();
        let mut seen = false;
        for enemy in self.enemies.values_mut() {
            seen |= enemy.can_see_player(&self.grid, player, &self.config);
            enemy.update(elapsed, &self.grid, &self.config, &mut self.rng);
        }

        if self.detection.advance(seen, elapsed) {
            self.finish(Outcome::Lose);
        } else if self.reached_goal() {
            self.finish(Outcome::Win);
        }
        TickReport { seen, status: self.status }
    }

    fn steer_player(&mut self, controls: ControlFlags, elapsed: f32) {
        let step = self.config.player_speed * elapsed;
        move_player(
            &self.grid,
            &mut self.player.position,
            controls,
            step,
            self.config.footprint_half_extent,
        );
        let held = [
            (controls.right, Direction::Right),
            (controls.left, Direction::Left),
            (controls.up, Direction::Up),
            (controls.down, Direction::Down),
        ];
        if let Some((_, dir)) = held.into_iter().rev().find(|(pressed, _)| *pressed) {
            self.player.facing = dir;
        }
    }

    fn reached_goal(&self) -> bool {
        self.goal.is_some_and(|goal| {
            self.player.planar().distance_squared(goal.cell.center()) < self.config.win_radius_sq
        })
    }

    fn finish(&mut self, outcome: Outcome) {
        self.status = GameStatus::Ended(outcome);
        info!(
            level_index = self.level_index,
            tick = self.tick,
            outcome = outcome.message(),
            "level ended"
        );
    }
}
