use std::error::Error;
use std::fmt;

use crate::{
    game::Game,
    journal::{FrameRecord, InputJournal, JOURNAL_FORMAT_VERSION},
    types::{GameError, GameStatus},
};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    UnsupportedVersion { found: u16 },
    Game(GameError),
    /// A `Retry` record appeared while the level was still being played.
    RetryWhilePlaying { frame: usize },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::UnsupportedVersion { found } => write!(
                f,
                "journal format version {found} is unsupported, expected {JOURNAL_FORMAT_VERSION}"
            ),
            ReplayError::Game(err) => write!(f, "{err}"),
            ReplayError::RetryWhilePlaying { frame } => {
                write!(f, "frame {frame} retries a level that has not ended")
            }
        }
    }
}

impl Error for ReplayError {}

impl From<GameError> for ReplayError {
    fn from(err: GameError) -> Self {
        ReplayError::Game(err)
    }
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_status: GameStatus,
    pub final_tick: u64,
    pub level_index: u32,
    pub final_snapshot_hash: u64,
}

impl ReplayResult {
    fn capture(game: &Game) -> Self {
        Self {
            final_status: game.status(),
            final_tick: game.current_tick(),
            level_index: game.level_index(),
            final_snapshot_hash: game.snapshot_hash(),
        }
    }
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion { found: journal.format_version });
    }
    let mut game = Game::new(journal.seed, journal.config.clone())?;
    for (index, record) in journal.frames.iter().enumerate() {
        match *record {
            FrameRecord::Tick { elapsed, controls } => {
                game.tick(elapsed, controls);
            }
            FrameRecord::Retry => match game.retry() {
                Ok(()) => {}
                Err(GameError::NotTerminal) => {
                    return Err(ReplayError::RetryWhilePlaying { frame: index });
                }
                Err(err) => return Err(err.into()),
            },
        }
    }
    Ok(ReplayResult::capture(&game))
}
