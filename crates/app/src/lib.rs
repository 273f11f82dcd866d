pub mod app_loop;
pub mod seed;
pub mod settings_file;

use maze_core::Outcome;

pub const APP_NAME: &str = "Lampwalk";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Stable reason code for an ended level, used in logs.
pub fn outcome_code(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "WIN_GOAL_REACHED",
        Outcome::Lose => "LOSE_DETECTED",
    }
}
