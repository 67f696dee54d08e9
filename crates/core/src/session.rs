//! Game session - the store plus its one-second timer.
//!
//! All input should go through the session rather than the bare store: each
//! dispatch re-synchronises the timer with the phase, so leaving `Playing`
//! cancels the running schedule and starting a game acquires a fresh one.

use crate::game_state::GameState;
use crate::result::GameResult;
use crate::store::GameStore;
use crate::timer::TimerCoordinator;
use crate::types::{GameAction, GameMode, GamePhase, TICK_MS};

#[derive(Debug)]
pub struct GameSession {
    store: GameStore,
    timer: TimerCoordinator,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_store(GameStore::new(), TICK_MS)
    }

    /// Session over an existing store with a custom tick interval.
    pub fn with_store(store: GameStore, tick_ms: u32) -> Self {
        let mut session = Self {
            store,
            timer: TimerCoordinator::new(tick_ms),
        };
        session.sync_timer();
        session
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    pub fn phase(&self) -> GamePhase {
        self.store.phase()
    }

    pub fn timer(&self) -> &TimerCoordinator {
        &self.timer
    }

    pub fn dispatch(&mut self, action: GameAction) -> bool {
        let changed = self.store.dispatch(action);
        self.sync_timer();
        changed
    }

    pub fn start(&mut self) {
        self.dispatch(GameAction::Start);
    }

    pub fn reset(&mut self) {
        self.dispatch(GameAction::Reset);
    }

    pub fn select_number(&mut self, number: u8) -> bool {
        let accepted = self.store.select_number(number);
        self.sync_timer();
        accepted
    }

    pub fn tick(&mut self) {
        self.dispatch(GameAction::Tick);
    }

    pub fn time_up(&mut self) {
        self.dispatch(GameAction::TimeUp);
    }

    pub fn complete(&mut self) {
        self.dispatch(GameAction::Complete);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.dispatch(GameAction::SetMode(mode));
    }

    pub fn set_time_limit(&mut self, seconds: f64) {
        self.dispatch(GameAction::SetTimeLimit(seconds));
    }

    pub fn get_result(&self) -> Option<GameResult> {
        self.store.get_result()
    }

    pub fn is_valid_click(&self, number: u8) -> bool {
        self.store.is_valid_click(number)
    }

    /// Feed wall-clock time; returns the number of ticks delivered.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let ticks = self.timer.advance(elapsed_ms, &mut self.store);
        self.sync_timer();
        ticks
    }

    fn sync_timer(&mut self) {
        self.timer.sync(self.store.phase() == GamePhase::Playing);
        self.timer.observe(&mut self.store);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_follows_phase() {
        let mut session = GameSession::new();
        assert!(!session.timer().is_running());

        session.start();
        assert!(session.timer().is_running());

        session.time_up();
        assert!(!session.timer().is_running());

        session.reset();
        assert!(!session.timer().is_running());
    }

    #[test]
    fn test_advance_ticks_while_playing() {
        let mut session = GameSession::new();
        assert_eq!(session.advance(3000), 0);

        session.start();
        assert_eq!(session.advance(2500), 2);
        assert_eq!(session.state().elapsed_seconds(), 2);
    }

    #[test]
    fn test_time_limit_ends_game() {
        let mut session = GameSession::new();
        session.set_time_limit(10.0);
        session.start();
        session.select_number(0);

        assert_eq!(session.advance(60_000), 10);
        assert_eq!(session.phase(), GamePhase::Ended);
        let result = session.get_result().unwrap();
        assert_eq!(result.total_time, 10);
        assert_eq!(result.numbers_found, 1);
    }

    #[test]
    fn test_completion_mode_never_expires() {
        let mut session = GameSession::new();
        session.set_mode(GameMode::Completion);
        session.start();
        session.advance(700_000);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.state().elapsed_seconds(), 700);
    }

    #[test]
    fn test_restart_discards_partial_interval() {
        let mut session = GameSession::new();
        session.start();
        session.advance(900);
        session.reset();
        session.start();
        assert_eq!(session.advance(500), 0);
        assert_eq!(session.state().elapsed_seconds(), 0);
    }

    #[test]
    fn test_finding_everything_stops_timer() {
        let mut session = GameSession::new();
        session.start();
        for n in 0..100u8 {
            assert!(session.select_number(n));
        }
        assert_eq!(session.phase(), GamePhase::Ended);
        assert!(!session.timer().is_running());
        assert_eq!(session.advance(5000), 0);
        assert!(session.get_result().unwrap().is_victory);
    }
}
