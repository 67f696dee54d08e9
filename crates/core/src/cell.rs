//! Per-cell view state derived from the game state.

use crate::game_state::GameState;

/// How one board cell should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellState {
    /// Number shown in the cell (0-99)
    pub number: u8,
    /// Position on the board (0-99, row-major)
    pub position: usize,
    /// Already found
    pub is_selected: bool,
    /// The number the player has to find next
    pub is_next: bool,
    /// Accepts clicks (playing and not yet found)
    pub is_clickable: bool,
}

impl CellState {
    /// Derive the cell at `position`; `None` when the board has no such cell.
    pub fn at(state: &GameState, position: usize) -> Option<Self> {
        let number = state.board_layout().get(position)?;
        let is_selected = state.selected_numbers().contains(number);
        Some(Self {
            number,
            position,
            is_selected,
            is_next: number == state.next_expected_number(),
            is_clickable: state.is_playing() && !is_selected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;

    #[test]
    fn test_idle_board_has_no_cells() {
        assert_eq!(CellState::at(&GameState::new(), 0), None);
    }

    #[test]
    fn test_cell_flags_while_playing() {
        let state = GameState::new()
            .apply(GameAction::Start)
            .apply(GameAction::SelectNumber(0));
        let layout = state.board_layout().clone();

        let found = CellState::at(&state, layout.position_of(0).unwrap()).unwrap();
        assert!(found.is_selected);
        assert!(!found.is_next);
        assert!(!found.is_clickable);

        let next = CellState::at(&state, layout.position_of(1).unwrap()).unwrap();
        assert!(!next.is_selected);
        assert!(next.is_next);
        assert!(next.is_clickable);

        let other = CellState::at(&state, layout.position_of(50).unwrap()).unwrap();
        assert!(!other.is_next);
        assert!(other.is_clickable);

        assert_eq!(CellState::at(&state, 100), None);
    }

    #[test]
    fn test_nothing_clickable_after_end() {
        let state = GameState::new()
            .apply(GameAction::Start)
            .apply(GameAction::TimeUp);
        assert!(state.cells().all(|c| !c.is_clickable));
    }
}
