//! Maze generation orchestration: reset the grid, carve, then pick the goal.

use crate::config::SimConfig;
use crate::grid::WallGrid;
use crate::rng::RngSource;
use crate::types::Cell;

use super::carver::carve_from;
use super::goal::select_goal;
use super::model::GeneratedMaze;

pub struct MazeGenerator {
    width: usize,
    height: usize,
    start: Cell,
}

impl MazeGenerator {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, start: Cell::new((width / 2) as i32, 1) }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self { width: config.width, height: config.height, start: config.start_cell() }
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn generate(&self, rng: &mut RngSource) -> GeneratedMaze {
        let mut grid = WallGrid::solid(self.width, self.height);
        let dead_ends = carve_from(&mut grid, self.start, rng);
        let goal = select_goal(&dead_ends);
        GeneratedMaze { grid, start: self.start, dead_ends, goal }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet, VecDeque};

    use proptest::prelude::*;
    use xxhash_rust::xxh3::xxh3_64;

    use super::*;
    use crate::types::Direction;

    fn generate(seed: u64, width: usize, height: usize) -> GeneratedMaze {
        MazeGenerator::new(width, height).generate(&mut RngSource::new(seed))
    }

    fn open_neighbours(grid: &WallGrid, cell: Cell) -> Vec<Cell> {
        Direction::ALL.iter().map(|&dir| cell.step(dir, 1)).filter(|&n| grid.is_open(n)).collect()
    }

    fn distances_from(grid: &WallGrid, start: Cell) -> BTreeMap<Cell, u32> {
        let mut distances = BTreeMap::from([(start, 0_u32)]);
        let mut open = VecDeque::from([start]);
        while let Some(cell) = open.pop_front() {
            let next_distance = distances[&cell] + 1;
            for next in open_neighbours(grid, cell) {
                if distances.contains_key(&next) {
                    continue;
                }
                distances.insert(next, next_distance);
                open.push_back(next);
            }
        }
        distances
    }

    fn assert_maze_invariants(maze: &GeneratedMaze) {
        let grid = &maze.grid;
        let open: Vec<Cell> = grid.open_cells().collect();
        let reachable = distances_from(grid, maze.start);
        assert_eq!(reachable.len(), open.len(), "every open cell must be reachable from start");

        for cell in grid.cells() {
            if grid.on_border(cell) {
                assert!(grid.is_wall(cell), "border cell {cell:?} must stay a wall");
            }
        }

        // A spanning tree has exactly one fewer corridor link than open cells; any merge of
        // parallel corridors or open room would add a cycle.
        let links: usize = open
            .iter()
            .map(|&cell| {
                [Direction::Right, Direction::Up]
                    .iter()
                    .filter(|&&dir| grid.is_open(cell.step(dir, 1)))
                    .count()
            })
            .sum();
        assert_eq!(links + 1, open.len(), "open cells must form a tree");

        for &dead_end in &maze.dead_ends {
            assert_eq!(reachable[&dead_end.cell], dead_end.depth);
        }

        let recorded: BTreeSet<Cell> = maze.dead_ends.iter().map(|d| d.cell).collect();
        let leaves: BTreeSet<Cell> = open
            .iter()
            .copied()
            .filter(|&cell| cell != maze.start && open_neighbours(grid, cell).len() == 1)
            .collect();
        assert_eq!(recorded, leaves, "dead ends are exactly the corridor leaves");
    }

    #[test]
    fn seed_42_default_grid_goal_is_deepest_dead_end() {
        let maze = generate(42, 22, 17);
        let goal = maze.goal.expect("default grid always yields dead ends");
        let deepest = maze.dead_ends.iter().map(|d| d.depth).max().expect("dead ends");
        assert_eq!(goal.depth, deepest);
        assert_ne!(goal.cell, maze.start);
        assert_eq!(maze.validate(), Ok(()));
        assert_maze_invariants(&maze);
    }

    #[test]
    fn same_seed_produces_byte_identical_maze() {
        let a = generate(123_456, 22, 17);
        let b = generate(123_456, 22, 17);
        assert_eq!(xxh3_64(&a.canonical_bytes()), xxh3_64(&b.canonical_bytes()));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_change_the_layout() {
        let a = generate(1, 22, 17);
        let b = generate(2, 22, 17);
        assert_ne!(a.grid, b.grid);
    }

    #[test]
    fn start_cell_sits_above_the_bottom_border() {
        let generator = MazeGenerator::new(22, 17);
        assert_eq!(generator.start(), Cell::new(11, 1));
        let from_config = MazeGenerator::from_config(&SimConfig::default());
        assert_eq!(from_config.start(), generator.start());
    }

    #[test]
    fn corridors_never_form_open_blocks() {
        let maze = generate(77_777, 22, 17);
        let grid = &maze.grid;
        for cell in grid.cells() {
            let block = [
                cell,
                cell.step(Direction::Right, 1),
                cell.step(Direction::Up, 1),
                cell.step(Direction::Right, 1).step(Direction::Up, 1),
            ];
            assert!(block.iter().any(|&c| grid.is_wall(c)), "2x2 open block at {cell:?}");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_mazes_hold_invariants(
            seed in any::<u64>(),
            width in 5_usize..=31,
            height in 5_usize..=25,
        ) {
            let maze = generate(seed, width, height);
            assert_maze_invariants(&maze);
            if let Some(goal) = maze.goal {
                let deepest = maze.dead_ends.iter().map(|d| d.depth).max().unwrap_or(0);
                prop_assert_eq!(goal.depth, deepest);
            }
        }
    }
}
