pub mod config;
pub mod enemy;
pub mod game;
pub mod grid;
pub mod journal;
pub mod mapgen;
pub mod movement;
pub mod replay;
pub mod rng;
pub mod types;
pub mod view;

pub use config::{ConfigError, SimConfig};
pub use enemy::Enemy;
pub use game::{EndChoice, EndSignal, Game};
pub use grid::WallGrid;
pub use journal::{FrameRecord, InputJournal};
pub use mapgen::{DeadEnd, GeneratedMaze};
pub use replay::*;
pub use types::*;
pub use view::{AgentView, FrameView, LampParams};
