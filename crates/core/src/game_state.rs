//! Game state module - the authoritative state and its reducer
//!
//! `GameState` is an immutable snapshot: every action produces a new value
//! via [`GameState::apply`], which consumes the old one. Actions that do not
//! apply to the current phase return the state unchanged.
//!
//! Phase table:
//!
//! | Phase | Accepted | Result |
//! |-------|----------|--------|
//! | Idle | `Start` | Playing with a fresh shuffled board |
//! | Idle | `SetMode`, `SetTimeLimit` | Idle with updated configuration |
//! | Playing | `SelectNumber(n)` | cursor advances iff `n` is next; Ended after 99 |
//! | Playing | `Tick` | elapsed + 1 |
//! | Playing | `TimeUp`, `Complete` | Ended, nothing else changes |
//! | any | `Reset` | fresh Idle keeping mode and time limit |

use rand::Rng;

use crate::board::BoardLayout;
use crate::cell::CellState;
use crate::selection::SelectedNumbers;
use crate::shuffle::create_board_with;
use crate::types::*;
use crate::validation::{clamp_time_limit, is_valid_number_click};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    phase: GamePhase,
    mode: GameMode,
    /// Always within `[MIN_TIME_LIMIT, MAX_TIME_LIMIT]`.
    time_limit_seconds: u16,
    elapsed_seconds: u32,
    /// Next number to find; `BOARD_SIZE` once everything is found.
    next_expected_number: u8,
    selected_numbers: SelectedNumbers,
    /// Empty iff idle.
    board_layout: BoardLayout,
}

impl GameState {
    /// Idle state with the default mode and time limit
    pub fn new() -> Self {
        Self::with_config(GameMode::default(), DEFAULT_TIME_LIMIT)
    }

    /// Idle state with the given configuration (time limit is clamped)
    pub fn with_config(mode: GameMode, time_limit_seconds: u16) -> Self {
        Self {
            phase: GamePhase::Idle,
            mode,
            time_limit_seconds: clamp_time_limit(time_limit_seconds as f64),
            elapsed_seconds: 0,
            next_expected_number: FIRST_NUMBER,
            selected_numbers: SelectedNumbers::new(),
            board_layout: BoardLayout::empty(),
        }
    }

    /// Apply an action, shuffling with the thread-local generator on `Start`.
    pub fn apply(self, action: GameAction) -> Self {
        self.apply_with(action, &mut rand::thread_rng())
    }

    /// Apply an action with an explicit generator for the board shuffle.
    pub fn apply_with<R: Rng + ?Sized>(self, action: GameAction, rng: &mut R) -> Self {
        match (self.phase, action) {
            (GamePhase::Idle, GameAction::Start) => Self {
                phase: GamePhase::Playing,
                elapsed_seconds: 0,
                next_expected_number: FIRST_NUMBER,
                selected_numbers: SelectedNumbers::new(),
                board_layout: create_board_with(rng),
                ..self
            },
            (GamePhase::Idle, GameAction::SetMode(mode)) => Self { mode, ..self },
            (GamePhase::Idle, GameAction::SetTimeLimit(seconds)) => Self {
                time_limit_seconds: clamp_time_limit(seconds),
                ..self
            },
            (GamePhase::Playing, GameAction::SelectNumber(n)) => self.select(n),
            (GamePhase::Playing, GameAction::Tick) => Self {
                elapsed_seconds: self.elapsed_seconds.saturating_add(1),
                ..self
            },
            (GamePhase::Playing, GameAction::TimeUp | GameAction::Complete) => Self {
                phase: GamePhase::Ended,
                ..self
            },
            (_, GameAction::Reset) => Self::with_config(self.mode, self.time_limit_seconds),
            _ => self,
        }
    }

    fn select(mut self, number: u8) -> Self {
        if !is_valid_number_click(number, self.next_expected_number) {
            return self;
        }

        self.selected_numbers.insert(number);
        self.next_expected_number += 1;
        if self.next_expected_number > LAST_NUMBER {
            self.phase = GamePhase::Ended;
        }
        self
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn time_limit_seconds(&self) -> u16 {
        self.time_limit_seconds
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn next_expected_number(&self) -> u8 {
        self.next_expected_number
    }

    pub fn selected_numbers(&self) -> &SelectedNumbers {
        &self.selected_numbers
    }

    pub fn board_layout(&self) -> &BoardLayout {
        &self.board_layout
    }

    /// Whether selecting `number` right now would be accepted
    pub fn is_valid_click(&self, number: u8) -> bool {
        self.is_playing() && is_valid_number_click(number, self.next_expected_number)
    }

    /// Most recently found number, `None` before the first find
    pub fn last_selected_number(&self) -> Option<u8> {
        self.next_expected_number.checked_sub(1)
    }

    /// Expiry threshold for the timer (absent in completion mode)
    pub fn time_limit(&self) -> Option<u16> {
        match self.mode {
            GameMode::TimeLimit => Some(self.time_limit_seconds),
            GameMode::Completion => None,
        }
    }

    /// Seconds left before the limit, `None` in completion mode
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.time_limit()
            .map(|limit| (limit as u32).saturating_sub(self.elapsed_seconds))
    }

    /// Derived state of the cell at `position`
    pub fn cell(&self, position: usize) -> Option<CellState> {
        CellState::at(self, position)
    }

    /// Derived state of every cell, in position order
    pub fn cells(&self) -> impl Iterator<Item = CellState> + '_ {
        (0..self.board_layout.len()).filter_map(move |p| self.cell(p))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
