//! Public data models for generated mazes and their dead ends.

use std::fmt;

use crate::grid::WallGrid;
use crate::types::Cell;

/// A carved cell with no further carve direction, tagged with its carve depth from the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeadEnd {
    pub cell: Cell,
    pub depth: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMaze {
    pub grid: WallGrid,
    pub start: Cell,
    /// Dead ends in the order the carver finished them.
    pub dead_ends: Vec<DeadEnd>,
    pub goal: Option<DeadEnd>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeDefect {
    NoDeadEnds,
    GoalAtStart,
    OpenBorder(Cell),
}

impl fmt::Display for MazeDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeDefect::NoDeadEnds => write!(f, "carver produced no dead ends"),
            MazeDefect::GoalAtStart => write!(f, "goal coincides with the start cell"),
            MazeDefect::OpenBorder(cell) => {
                write!(f, "border cell ({}, {}) is open", cell.x, cell.y)
            }
        }
    }
}

impl GeneratedMaze {
    pub fn validate(&self) -> Result<(), MazeDefect> {
        let Some(goal) = self.goal else {
            return Err(MazeDefect::NoDeadEnds);
        };
        if goal.cell == self.start {
            return Err(MazeDefect::GoalAtStart);
        }
        let grid = &self.grid;
        if let Some(cell) = grid.cells().find(|&c| grid.on_border(c) && grid.is_open(c)) {
            return Err(MazeDefect::OpenBorder(cell));
        }
        Ok(())
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = self.grid.canonical_bytes();
        bytes.extend(self.start.x.to_le_bytes());
        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend((self.dead_ends.len() as u32).to_le_bytes());
        for dead_end in &self.dead_ends {
            bytes.extend(dead_end.cell.x.to_le_bytes());
            bytes.extend(dead_end.cell.y.to_le_bytes());
            bytes.extend(dead_end.depth.to_le_bytes());
        }
        bytes
    }
}
