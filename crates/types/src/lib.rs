//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, terminal rendering, configuration).
//!
//! # Board Dimensions
//!
//! The board is a square grid holding every number exactly once:
//!
//! - **Grid**: 10 x 10 cells (positions 0-99, row-major)
//! - **Numbers**: 0 through 99, found in ascending order
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | One elapsed-second notification |
//! | `MIN_TIME_LIMIT` | 10 | Shortest configurable limit (seconds) |
//! | `MAX_TIME_LIMIT` | 600 | Longest configurable limit (seconds) |
//! | `DEFAULT_TIME_LIMIT` | 100 | Limit used when none (or garbage) is given |
//!
//! # Examples
//!
//! ```
//! use number_sequence_types::{GameAction, GameMode, GamePhase, BOARD_SIZE};
//!
//! let mode = GameMode::from_str("completion").unwrap();
//! assert_eq!(mode, GameMode::Completion);
//! assert_eq!(mode.toggled(), GameMode::TimeLimit);
//!
//! let action = GameAction::SelectNumber(0);
//! assert_eq!(action.as_str(), "selectNumber");
//!
//! assert_eq!(GamePhase::default(), GamePhase::Idle);
//! assert_eq!(BOARD_SIZE, 100);
//! ```

use serde::{Deserialize, Serialize};

/// Total number of cells on the board.
pub const BOARD_SIZE: u8 = 100;

/// Cells per row and per column.
pub const GRID_DIMENSION: u8 = 10;

/// First number the player has to find.
pub const FIRST_NUMBER: u8 = 0;

/// Last number the player has to find.
pub const LAST_NUMBER: u8 = 99;

/// Shortest allowed time limit in seconds.
pub const MIN_TIME_LIMIT: u16 = 10;

/// Longest allowed time limit in seconds.
pub const MAX_TIME_LIMIT: u16 = 600;

/// Time limit used at startup and for non-finite input.
pub const DEFAULT_TIME_LIMIT: u16 = 100;

/// Timer interval in milliseconds (one tick per elapsed second).
pub const TICK_MS: u32 = 1000;

/// Flat row-major board position for grid coordinates; `None` off the grid.
#[inline(always)]
pub fn grid_index(row: u8, col: u8) -> Option<usize> {
    if row >= GRID_DIMENSION || col >= GRID_DIMENSION {
        return None;
    }
    Some(row as usize * GRID_DIMENSION as usize + col as usize)
}

/// Grid coordinates `(row, col)` of a board position; `None` off the board.
#[inline(always)]
pub fn grid_coords(position: usize) -> Option<(u8, u8)> {
    if position >= BOARD_SIZE as usize {
        return None;
    }
    let dim = GRID_DIMENSION as usize;
    Some(((position / dim) as u8, (position % dim) as u8))
}


/// Coarse lifecycle stage of one game session.
///
/// - **Idle**: configuring, no board
/// - **Playing**: board shown, timer running, selections accepted
/// - **Ended**: terminal until reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    #[default]
    Idle,
    Playing,
    Ended,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Playing => "playing",
            GamePhase::Ended => "ended",
        }
    }
}

/// Timing variant of a game.
///
/// - **TimeLimit**: the game ends when elapsed time reaches the configured limit
/// - **Completion**: the game ends only once all 100 numbers are found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    #[default]
    TimeLimit,
    Completion,
}

impl GameMode {
    /// Parse a mode from user input (case-insensitive, a few aliases)
    ///
    /// # Examples
    ///
    /// ```
    /// use number_sequence_types::GameMode;
    ///
    /// assert_eq!(GameMode::from_str("timeLimit"), Some(GameMode::TimeLimit));
    /// assert_eq!(GameMode::from_str("time-limit"), Some(GameMode::TimeLimit));
    /// assert_eq!(GameMode::from_str("COMPLETION"), Some(GameMode::Completion));
    /// assert_eq!(GameMode::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "timelimit" | "time-limit" | "time_limit" | "time" => Some(GameMode::TimeLimit),
            "completion" | "complete" => Some(GameMode::Completion),
            _ => None,
        }
    }

    /// Wire/config name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::TimeLimit => "timeLimit",
            GameMode::Completion => "completion",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::TimeLimit => "Time Limit",
            GameMode::Completion => "Completion",
        }
    }

    /// One-line help text.
    pub fn description(&self) -> &'static str {
        match self {
            GameMode::TimeLimit => "Find as many numbers as possible before time runs out",
            GameMode::Completion => "Find all numbers from 0 to 99 as fast as you can",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            GameMode::TimeLimit => GameMode::Completion,
            GameMode::Completion => GameMode::TimeLimit,
        }
    }
}

/// Actions accepted by the game reducer
///
/// Every input source (keyboard, mouse, timer) funnels into one of these.
/// Actions that do not apply to the current phase are identity transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    /// Shuffle a fresh board and begin playing
    Start,
    /// Attempt to find the given number
    SelectNumber(u8),
    /// One second of play has elapsed
    Tick,
    /// The configured time limit was reached
    TimeUp,
    /// End the game immediately (same transition as `TimeUp`)
    Complete,
    /// Discard the current game, keeping mode and time limit
    Reset,
    /// Change the timing mode (Idle only)
    SetMode(GameMode),
    /// Change the time limit; clamped into range (Idle only)
    SetTimeLimit(f64),
}

impl GameAction {
    /// camelCase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::SelectNumber(_) => "selectNumber",
            GameAction::Tick => "tick",
            GameAction::TimeUp => "timeUp",
            GameAction::Complete => "complete",
            GameAction::Reset => "reset",
            GameAction::SetMode(_) => "setMode",
            GameAction::SetTimeLimit(_) => "setTimeLimit",
        }
    }
}
