use std::error::Error;
use std::fmt;

use glam::{IVec2, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::config::ConfigError;

new_key_type! {
    pub struct EnemyId;
}

/// Integer grid coordinate. `x` grows to the right, `y` grows upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, dir: Direction, distance: i32) -> Self {
        let offset = dir.offset() * distance;
        Self { x: self.x + offset.x, y: self.y + offset.y }
    }

    /// Cell containing a continuous maze-plane point, using nearest-integer rounding.
    pub fn containing(point: Vec2) -> Self {
        Self { x: point.x.round() as i32, y: point.y.round() as i32 }
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, 1),
            Direction::Down => IVec2::new(0, -1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn unit(self) -> Vec2 {
        self.offset().as_vec2()
    }

    pub fn unit3(self) -> Vec3 {
        self.unit().extend(0.0)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// The two headings at right angles to `self`, in a fixed order.
    pub fn perpendiculars(self) -> [Direction; 2] {
        if self.is_vertical() {
            [Direction::Right, Direction::Left]
        } else {
            [Direction::Up, Direction::Down]
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub(crate) fn code(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// The four movement flags written by the input layer each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Player,
    Guard,
    Scout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win => "YOU WIN",
            Outcome::Lose => "YOU LOSE",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Ended(Outcome),
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Ended(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Whether any enemy had the player in view on this tick.
    pub seen: bool,
    pub status: GameStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    InvalidConfig(ConfigError),
    GenerationExhausted { attempts: u32 },
    NotTerminal,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfig(err) => write!(f, "invalid simulation config: {err}"),
            GameError::GenerationExhausted { attempts } => {
                write!(f, "maze generation failed validation after {attempts} attempts")
            }
            GameError::NotTerminal => write!(f, "level has not ended yet"),
        }
    }
}

impl Error for GameError {}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::InvalidConfig(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendiculars_switch_axis() {
        for dir in Direction::ALL {
            for turned in dir.perpendiculars() {
                assert_ne!(dir.is_vertical(), turned.is_vertical());
            }
        }
    }

    #[test]
    fn stepping_matches_unit_vector() {
        let origin = Cell::new(4, 4);
        assert_eq!(origin.step(Direction::Up, 2), Cell::new(4, 6));
        assert_eq!(origin.step(Direction::Left, 1), Cell::new(3, 4));
        for dir in Direction::ALL {
            assert_eq!(origin.step(dir, 1).step(dir.opposite(), 1), origin);
        }
    }

    #[test]
    fn containing_rounds_to_nearest_cell() {
        assert_eq!(Cell::containing(Vec2::new(2.49, 3.51)), Cell::new(2, 4));
        assert_eq!(Cell::containing(Vec2::new(-0.4, 0.0)), Cell::new(0, 0));
        assert_eq!(Cell::containing(Vec2::new(-0.6, 0.0)), Cell::new(-1, 0));
    }
}
