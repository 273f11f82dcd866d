use maze_core::{ControlFlags, EndChoice, EndSignal, Game, GameError, InputJournal};
use macroquad::prelude::KeyCode;
use tracing::info;

use crate::outcome_code;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Playing,
    /// The level has ended and the menu is up; `selected` indexes `signal.choices()`.
    EndScreen {
        signal: EndSignal,
        selected: usize,
    },
    Quit,
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Present when the session is being recorded for later replay.
    pub journal: Option<InputJournal>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recording(game: &Game) -> Self {
        Self {
            mode: AppMode::Playing,
            journal: Some(InputJournal::new(game.run_seed(), game.config().clone())),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.mode == AppMode::Quit
    }

    /// Process one frame. Movement controls only reach the simulation while playing;
    /// menu keys only matter once the end signal is up.
    pub fn tick(
        &mut self,
        game: &mut Game,
        elapsed: f32,
        controls: ControlFlags,
        keys_pressed: &[KeyCode],
    ) -> Result<(), GameError> {
        match self.mode {
            AppMode::Playing => {
                let report = game.tick(elapsed, controls);
                if let Some(journal) = self.journal.as_mut() {
                    journal.record_tick(elapsed, controls);
                }
                if report.status.is_terminal()
                    && let Some(signal) = game.end_signal()
                {
                    info!(
                        outcome = outcome_code(signal.outcome()),
                        tick = game.current_tick(),
                        "level ended"
                    );
                    self.mode = AppMode::EndScreen { signal, selected: 0 };
                }
            }
            AppMode::EndScreen { signal, selected } => {
                let choices = signal.choices();
                if keys_pressed.iter().any(|key| matches!(key, KeyCode::Up | KeyCode::W)) {
                    let selected = (selected + choices.len() - 1) % choices.len();
                    self.mode = AppMode::EndScreen { signal, selected };
                } else if keys_pressed.iter().any(|key| matches!(key, KeyCode::Down | KeyCode::S))
                {
                    let selected = (selected + 1) % choices.len();
                    self.mode = AppMode::EndScreen { signal, selected };
                } else if keys_pressed
                    .iter()
                    .any(|key| matches!(key, KeyCode::Enter | KeyCode::KpEnter | KeyCode::Space))
                {
                    self.confirm(game, choices[selected])?;
                } else if keys_pressed.contains(&KeyCode::Escape) {
                    self.confirm(game, EndChoice::Quit)?;
                }
            }
            AppMode::Quit => {}
        }
        Ok(())
    }

    fn confirm(&mut self, game: &mut Game, choice: EndChoice) -> Result<(), GameError> {
        match choice {
            EndChoice::Retry => {
                game.retry()?;
                if let Some(journal) = self.journal.as_mut() {
                    journal.record_retry();
                }
                self.mode = AppMode::Playing;
            }
            EndChoice::Quit => self.mode = AppMode::Quit,
        }
        Ok(())
    }
}
