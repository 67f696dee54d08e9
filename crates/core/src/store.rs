//! Action-dispatch store
//!
//! `GameStore` is the single owner of the current [`GameState`]. Every
//! mutation goes through [`GameStore::dispatch`], which replaces the state
//! wholesale with the reducer's output. The convenience methods mirror the
//! public game API (start, reset, select, tick, time up, configuration, result).

use tracing::{debug, info};

use crate::game_state::GameState;
use crate::result::GameResult;
use crate::timer::TimerTarget;
use crate::types::{GameAction, GameMode, GamePhase};

/// Owner of the authoritative game state
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    state: GameState,
}

impl GameStore {
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Latest state snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Run `action` through the reducer; returns true if the state changed.
    pub fn dispatch(&mut self, action: GameAction) -> bool {
        let before_phase = self.state.phase();
        let next = self.state.clone().apply(action);
        let changed = next != self.state;
        self.state = next;

        if action != GameAction::Tick {
            debug!(
                action = action.as_str(),
                changed,
                phase = self.state.phase().as_str(),
                "dispatched"
            );
        }

        if before_phase != self.state.phase() {
            match self.state.phase() {
                GamePhase::Playing => info!(
                    mode = self.state.mode().as_str(),
                    time_limit = self.state.time_limit_seconds(),
                    "game started"
                ),
                GamePhase::Ended => {
                    if let Some(result) = self.get_result() {
                        info!(
                            numbers_found = result.numbers_found,
                            total_time = result.total_time,
                            is_victory = result.is_victory,
                            "game ended"
                        );
                    }
                }
                GamePhase::Idle => info!("game reset"),
            }
        }

        changed
    }

    pub fn start(&mut self) {
        self.dispatch(GameAction::Start);
    }

    pub fn reset(&mut self) {
        self.dispatch(GameAction::Reset);
    }

    /// Try to find `number`; returns whether the selection was accepted.
    ///
    /// A rejected selection leaves the state untouched.
    pub fn select_number(&mut self, number: u8) -> bool {
        if !self.state.is_valid_click(number) {
            debug!(
                number,
                expected = self.state.next_expected_number(),
                "selection rejected"
            );
            return false;
        }
        self.dispatch(GameAction::SelectNumber(number));
        true
    }

    pub fn tick(&mut self) {
        self.dispatch(GameAction::Tick);
    }

    pub fn time_up(&mut self) {
        self.dispatch(GameAction::TimeUp);
    }

    /// End the game now. Not used by the terminal front end.
    pub fn complete(&mut self) {
        self.dispatch(GameAction::Complete);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.dispatch(GameAction::SetMode(mode));
    }

    pub fn set_time_limit(&mut self, seconds: f64) {
        self.dispatch(GameAction::SetTimeLimit(seconds));
    }

    /// Result of the ended game, `None` otherwise
    pub fn get_result(&self) -> Option<GameResult> {
        GameResult::from_state(&self.state)
    }

    pub fn is_valid_click(&self, number: u8) -> bool {
        self.state.is_valid_click(number)
    }
}

impl TimerTarget for GameStore {
    fn timer_should_run(&self) -> bool {
        self.state.is_playing()
    }

    fn timer_elapsed_seconds(&self) -> u32 {
        self.state.elapsed_seconds()
    }

    fn timer_limit_seconds(&self) -> Option<u16> {
        self.state.time_limit()
    }

    fn on_tick(&mut self) {
        self.tick();
    }

    fn on_time_up(&mut self) {
        self.time_up();
    }
}
