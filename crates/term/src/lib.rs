//! Terminal front end for the number sequence game.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GameView`] turns a `core::GameState` into styled cells, and
//! [`TerminalRenderer`] flushes only the cells that changed since the last
//! frame.
//!
//! - `core` stays deterministic and testable
//! - board geometry lives in one place, so mouse hit-testing matches what was drawn

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use number_sequence_core as core;
pub use number_sequence_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, ViewOverlay, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
