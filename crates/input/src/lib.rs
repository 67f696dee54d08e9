//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! and mouse events into [`UiCommand`]s and tracks the keyboard cursor over
//! the board.

pub mod cursor;
pub mod map;

pub use number_sequence_types as types;

pub use cursor::BoardCursor;
pub use map::{handle_key_event, handle_mouse_event, should_quit, UiCommand};
