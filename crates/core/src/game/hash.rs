//! Bit-exact fingerprint of the live level, compared across runs and replays.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::types::{AgentKind, Outcome};

fn write_vec3(hasher: &mut Xxh3, value: Vec3) {
    hasher.write_u32(value.x.to_bits());
    hasher.write_u32(value.y.to_bits());
    hasher.write_u32(value.z.to_bits());
}

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.run_seed);
        hasher.write_u32(self.level_index);
        hasher.write_u64(self.level_seed);
        hasher.write_u64(self.tick);
        hasher.write_u64(self.rng.draws());
        hasher.write(&self.grid.canonical_bytes());

        write_vec3(&mut hasher, self.player.position);
        hasher.write_u8(self.player.facing.code());

        hasher.write_usize(self.enemies.len());
        for enemy in self.enemies.values() {
            hasher.write_u8(match enemy.kind() {
                AgentKind::Player => 0,
                AgentKind::Guard => 1,
                AgentKind::Scout => 2,
            });
            write_vec3(&mut hasher, enemy.position());
            hasher.write_u8(enemy.facing().code());
            hasher.write_u32(enemy.timer().to_bits());
        }

        hasher.write_u32(self.detection.remaining().to_bits());
        hasher.write_u8(match self.status {
            GameStatus::Playing => 0,
            GameStatus::Ended(Outcome::Win) => 1,
            GameStatus::Ended(Outcome::Lose) => 2,
        });
        hasher.finish()
    }
}
