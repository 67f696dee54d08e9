//! End-of-game summary derived from a terminal state.

use serde::{Deserialize, Serialize};

use crate::game_state::GameState;
use crate::types::{GameMode, GamePhase, BOARD_SIZE};

/// Result shown once a game has ended
///
/// Serializes with camelCase keys:
/// `{"mode":"timeLimit","numbersFound":2,"totalTime":2,"isVictory":false}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub mode: GameMode,
    pub numbers_found: u8,
    pub total_time: u32,
    pub is_victory: bool,
}

impl GameResult {
    pub fn new(mode: GameMode, numbers_found: u8, total_time: u32) -> Self {
        Self {
            mode,
            numbers_found,
            total_time,
            is_victory: numbers_found >= BOARD_SIZE,
        }
    }

    /// Derive the result of an ended game; `None` in any other phase.
    pub fn from_state(state: &GameState) -> Option<Self> {
        if state.phase() != GamePhase::Ended {
            return None;
        }
        Some(Self::new(
            state.mode(),
            state.selected_numbers().len() as u8,
            state.elapsed_seconds(),
        ))
    }

    pub fn title(&self) -> &'static str {
        if self.is_victory {
            "Completed!"
        } else {
            "Time's Up!"
        }
    }

    pub fn message(&self) -> String {
        match self.mode {
            GameMode::TimeLimit if self.is_victory => format!(
                "Amazing! You found all {} numbers with time to spare!",
                self.numbers_found
            ),
            GameMode::TimeLimit => format!(
                "Time's up! You found {} out of {} numbers.",
                self.numbers_found, BOARD_SIZE
            ),
            GameMode::Completion => format!("Completed! Your time: {} seconds", self.total_time),
        }
    }

    /// Short one-liner suitable for sharing
    pub fn summary(&self) -> String {
        match self.mode {
            GameMode::TimeLimit => format!("Found {}/{} numbers", self.numbers_found, BOARD_SIZE),
            GameMode::Completion => format!("Completed in {}s", self.total_time),
        }
    }
}

/// Free-function form of [`GameResult::from_state`].
pub fn derive_result(state: &GameState) -> Option<GameResult> {
    GameResult::from_state(state)
}
