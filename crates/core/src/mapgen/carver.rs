//! Depth-first corridor carving with a one-cell wall buffer between passages.
//!
//! The walk is an explicit stack of frames. Each frame draws its untried headings one at a
//! time from the shared RNG and re-checks validity at the moment it is drawn, so a sibling
//! branch carved earlier can still veto a later heading. Dead ends are recorded when their
//! frame is popped.

use crate::grid::WallGrid;
use crate::rng::RngSource;
use crate::types::{Cell, Direction};

use super::model::DeadEnd;

struct Frame {
    cell: Cell,
    depth: u32,
    untried: [Direction; 4],
    remaining: usize,
    dead_end: bool,
}

impl Frame {
    fn enter(cell: Cell, depth: u32) -> Self {
        Self { cell, depth, untried: Direction::ALL, remaining: 4, dead_end: true }
    }

    /// Removes and returns a random untried heading, keeping the rest in order.
    fn take_untried(&mut self, rng: &mut RngSource) -> Option<Direction> {
        if self.remaining == 0 {
            return None;
        }
        let index = rng.below(self.remaining);
        let dir = self.untried[index];
        self.untried.copy_within(index + 1..self.remaining, index);
        self.remaining -= 1;
        Some(dir)
    }
}

pub(super) fn carve_from(grid: &mut WallGrid, start: Cell, rng: &mut RngSource) -> Vec<DeadEnd> {
    let mut dead_ends = Vec::new();
    grid.open(start);
    let mut stack = vec![Frame::enter(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let Some(dir) = frame.take_untried(rng) else {
            if frame.dead_end {
                dead_ends.push(DeadEnd { cell: frame.cell, depth: frame.depth });
            }
            stack.pop();
            continue;
        };
        if !is_valid_carve(grid, frame.cell, dir) {
            continue;
        }
        frame.dead_end = false;
        let next = frame.cell.step(dir, 1);
        let depth = frame.depth + 1;
        grid.open(next);
        stack.push(Frame::enter(next, depth));
    }

    dead_ends
}

/// The destination must be carvable and the five cells flanking it (sideways and one step
/// further) must still be walls, so the new corridor cannot touch an existing one.
pub(super) fn is_valid_carve(grid: &WallGrid, from: Cell, dir: Direction) -> bool {
    let dest = from.step(dir, 1);
    if !grid.can_carve(dest) {
        return false;
    }
    let beyond = from.step(dir, 2);
    let [side_a, side_b] = dir.perpendiculars();
    let flanks = [
        beyond,
        beyond.step(side_a, 1),
        beyond.step(side_b, 1),
        dest.step(side_a, 1),
        dest.step(side_b, 1),
    ];
    flanks.into_iter().all(|cell| grid.is_wall(cell))
}
