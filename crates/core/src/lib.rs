//! Core game logic module - pure, testable, UI-free
//!
//! This crate contains the rules of the number sequence game: a 10x10 board
//! holding 0..99 in random order, which the player must find in ascending
//! order. It has no dependencies on rendering or terminal I/O.
//!
//! # Module Structure
//!
//! - [`board`]: board layout (position → number)
//! - [`cell`]: per-cell derived view state
//! - [`game_state`]: the immutable game state and its reducer
//! - [`result`]: end-of-game summary
//! - [`selection`]: bitset of found numbers
//! - [`session`]: store + timer, the entry point for front ends
//! - [`shuffle`]: Fisher-Yates board generation
//! - [`store`]: action-dispatch owner of the current state
//! - [`timer`]: cancellable one-second tick coordination
//! - [`validation`]: time limit clamping and parsing
//!
//! # Rules
//!
//! - **Sequencing**: only the next expected number is accepted; anything
//!   else leaves the state untouched
//! - **Completion**: finding 99 ends the game in either mode
//! - **Time limit**: in time-limit mode the game ends when elapsed seconds
//!   reach the configured limit (10-600 s, default 100)
//! - **Reset**: returns to idle, keeping mode and time limit
//!
//! # Example
//!
//! ```
//! use number_sequence_core::GameState;
//! use number_sequence_types::{GameAction, GamePhase};
//!
//! let state = GameState::new().apply(GameAction::Start);
//! assert_eq!(state.phase(), GamePhase::Playing);
//!
//! // Wrong numbers are ignored.
//! let state = state.apply(GameAction::SelectNumber(5));
//! assert_eq!(state.next_expected_number(), 0);
//!
//! let state = state.apply(GameAction::SelectNumber(0));
//! assert_eq!(state.next_expected_number(), 1);
//! ```
//!
//! # Timing
//!
//! [`GameSession::advance`](session::GameSession::advance) takes elapsed
//! wall-clock milliseconds and turns them into one `Tick` per second, plus a
//! single `TimeUp` when the limit is reached.

pub mod board;
pub mod cell;
pub mod game_state;
pub mod result;
pub mod selection;
pub mod session;
pub mod shuffle;
pub mod store;
pub mod timer;
pub mod validation;

pub use number_sequence_types as types;

// Re-export commonly used types for convenience
pub use board::BoardLayout;
pub use cell::CellState;
pub use game_state::GameState;
pub use result::{derive_result, GameResult};
pub use selection::SelectedNumbers;
pub use session::GameSession;
pub use shuffle::{create_board, create_board_with, shuffle, shuffle_with};
pub use store::GameStore;
pub use timer::{format_time, RepeatingTimer, TimerCoordinator, TimerTarget};
pub use validation::{clamp_time_limit, is_valid_number_click, parse_time_limit_input};
