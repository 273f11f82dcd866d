//! Procedural maze generation split into carving, goal choice, and result models.

pub mod model;

mod carver;
mod generator;
mod goal;

pub use generator::MazeGenerator;
pub use goal::select_goal;
pub use model::{DeadEnd, GeneratedMaze, MazeDefect};

use crate::rng::RngSource;

pub fn generate_maze(width: usize, height: usize, seed: u64) -> GeneratedMaze {
    MazeGenerator::new(width, height).generate(&mut RngSource::new(seed))
}
