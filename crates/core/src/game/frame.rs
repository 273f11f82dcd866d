//! Read-only views handed to the renderer and the end-of-level menu.

use super::*;
use crate::types::{AgentKind, Outcome};
use crate::view::{AgentView, FrameView, LampParams};

const PLAYER_LAMP_FOV_DEG: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndChoice {
    Retry,
    Quit,
}

impl EndChoice {
    pub fn label(self) -> &'static str {
        match self {
            EndChoice::Retry => "TRY AGAIN",
            EndChoice::Quit => "QUIT",
        }
    }
}

/// Raised once a level reaches WIN or LOSE.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndSignal {
    outcome: Outcome,
}

impl EndSignal {
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn message(&self) -> &'static str {
        self.outcome.message()
    }

    pub fn choices(&self) -> [EndChoice; 2] {
        [EndChoice::Retry, EndChoice::Quit]
    }
}

impl Game {
    pub fn frame_view(&self) -> FrameView {
        let player = AgentView {
            kind: AgentKind::Player,
            position: self.player.position,
            facing: self.player.facing,
        };
        let mut lamps = Vec::with_capacity(self.enemies.len() + 1);
        lamps.push(LampParams {
            position: self.player.position,
            direction: self.player.facing.unit3(),
            fov: PLAYER_LAMP_FOV_DEG.to_radians(),
        });
        lamps.extend(self.enemies.values().map(|enemy| enemy.lamp(&self.config)));

        FrameView {
            player,
            enemies: self.enemies.values().map(Enemy::view).collect(),
            goal: self.goal.map(|goal| goal.cell.center().extend(0.0)),
            lamps,
            dead: self.status.is_terminal(),
        }
    }

    pub fn end_signal(&self) -> Option<EndSignal> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Ended(outcome) => Some(EndSignal { outcome }),
        }
    }
}
