//! Win-location choice over the carver's dead ends.

use super::model::DeadEnd;

/// Deepest dead end; the first one found wins a tie. `None` when there are no dead ends.
pub fn select_goal(dead_ends: &[DeadEnd]) -> Option<DeadEnd> {
    let mut best: Option<DeadEnd> = None;
    for &dead_end in dead_ends {
        if best.is_none_or(|current| dead_end.depth > current.depth) {
            best = Some(dead_end);
        }
    }
    best
}
