//! App controller: turns UI commands into session calls.
//!
//! The controller holds only presentation state (cursor, error flash,
//! summary visibility). Every game decision is made by the session.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::config::AppConfig;
use crate::core::{GameResult, GameSession, GameState};
use crate::input::{BoardCursor, UiCommand};
use crate::term::{FrameBuffer, GameView, ViewOverlay, Viewport};
use crate::types::{GameAction, GamePhase};

/// How long a rejected selection stays highlighted.
pub const FLASH_MS: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flash {
    position: usize,
    remaining_ms: u32,
}

pub struct App {
    session: GameSession,
    view: GameView,
    cursor: BoardCursor,
    summary_dismissed: bool,
    flash: Option<Flash>,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            view: GameView::default(),
            cursor: BoardCursor::new(),
            summary_dismissed: false,
            flash: None,
        }
    }

    /// Fresh session with the configured mode and time limit applied.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut session = GameSession::new();
        session.set_mode(config.mode);
        session.set_time_limit(config.time_limit_seconds as f64);
        Self::new(session)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    pub fn cursor(&self) -> BoardCursor {
        self.cursor
    }

    pub fn result(&self) -> Option<GameResult> {
        self.session.get_result()
    }

    pub fn is_playing(&self) -> bool {
        self.session.phase() == GamePhase::Playing
    }

    pub fn flash_position(&self) -> Option<usize> {
        self.flash.map(|f| f.position)
    }

    pub fn summary_visible(&self) -> bool {
        self.session.phase() == GamePhase::Ended && !self.summary_dismissed
    }

    pub fn handle(&mut self, command: UiCommand, viewport: Viewport) {
        match command {
            UiCommand::MoveCursor { d_row, d_col } => self.cursor.move_by(d_row, d_col),
            UiCommand::SelectAtCursor => self.select_at(self.cursor.index()),
            UiCommand::ClickAt { column, row } => {
                if let Some(position) = self.view.hit_test(viewport, column, row) {
                    self.cursor.move_to_index(position);
                    self.select_at(position);
                }
            }
            UiCommand::Start => {
                if self.session.dispatch(GameAction::Start) {
                    self.summary_dismissed = false;
                    self.flash = None;
                }
            }
            UiCommand::Reset => {
                if self.session.dispatch(GameAction::Reset) {
                    self.summary_dismissed = false;
                    self.flash = None;
                }
            }
            UiCommand::ToggleMode => {
                let mode = self.session.state().mode().toggled();
                self.session.set_mode(mode);
            }
            UiCommand::AdjustTimeLimit(delta) => {
                let current = self.session.state().time_limit_seconds() as f64;
                self.session.set_time_limit(current + delta as f64);
            }
            UiCommand::DismissSummary => {
                if self.session.phase() == GamePhase::Ended {
                    self.summary_dismissed = true;
                }
            }
        }
    }

    fn select_at(&mut self, position: usize) {
        let Some(cell) = self.session.state().cell(position) else {
            return;
        };
        if !cell.is_clickable {
            return;
        }
        if !self.session.select_number(cell.number) {
            debug!(position, number = cell.number, "wrong number flashed");
            self.flash = Some(Flash {
                position,
                remaining_ms: FLASH_MS,
            });
        }
    }

    /// Feed wall-clock time to the session and decay the error flash.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if let Some(flash) = self.flash.as_mut() {
            flash.remaining_ms = flash.remaining_ms.saturating_sub(elapsed_ms);
            if flash.remaining_ms == 0 {
                self.flash = None;
            }
        }
        self.session.advance(elapsed_ms)
    }

    pub fn overlay(&self) -> ViewOverlay {
        ViewOverlay {
            cursor: Some(self.cursor.index()),
            flash: self.flash_position(),
            show_summary: self.summary_visible(),
        }
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        self.view
            .render_into(self.session.state(), &self.overlay(), viewport, fb);
    }

    /// Hash of everything that ends up on screen.
    pub fn fingerprint(&self, viewport: Viewport) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.session.state().hash(&mut hasher);
        self.overlay().hash(&mut hasher);
        viewport.hash(&mut hasher);
        hasher.finish()
    }
}
