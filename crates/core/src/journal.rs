use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::types::ControlFlags;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Everything needed to reproduce a run: seed, config, and every frame's input in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub config: SimConfig,
    pub frames: Vec<FrameRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum FrameRecord {
    Tick { elapsed: f32, controls: ControlFlags },
    /// The player picked TRY AGAIN on the end screen.
    Retry,
}

impl InputJournal {
    pub fn new(seed: u64, config: SimConfig) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, config, frames: Vec::new() }
    }

    pub fn record_tick(&mut self, elapsed: f32, controls: ControlFlags) {
        self.frames.push(FrameRecord::Tick { elapsed, controls });
    }

    pub fn record_retry(&mut self) {
        self.frames.push(FrameRecord::Retry);
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
