//! Key and mouse mapping from terminal events to UI commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Intent produced by the player's input.
///
/// Commands are interpreted by the front end, which turns them into game
/// actions (or cursor moves). They carry no game rules themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Move the board cursor by the given row/column delta
    MoveCursor { d_row: i8, d_col: i8 },
    /// Select the number under the cursor
    SelectAtCursor,
    /// Select whatever is drawn at this terminal coordinate
    ClickAt { column: u16, row: u16 },
    Start,
    Reset,
    ToggleMode,
    /// Change the time limit by this many seconds
    AdjustTimeLimit(i16),
    DismissSummary,
}

/// Map keyboard input to UI commands.
pub fn handle_key_event(key: KeyEvent) -> Option<UiCommand> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(UiCommand::MoveCursor { d_row: 0, d_col: -1 })
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(UiCommand::MoveCursor { d_row: 0, d_col: 1 })
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(UiCommand::MoveCursor { d_row: -1, d_col: 0 })
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(UiCommand::MoveCursor { d_row: 1, d_col: 0 })
        }

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiCommand::SelectAtCursor),

        // Game control
        KeyCode::Char('n') | KeyCode::Char('N') => Some(UiCommand::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiCommand::Reset),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(UiCommand::ToggleMode),
        KeyCode::Esc => Some(UiCommand::DismissSummary),

        // Time limit
        KeyCode::Char('+') | KeyCode::Char('=') => Some(UiCommand::AdjustTimeLimit(10)),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(UiCommand::AdjustTimeLimit(-10)),
        KeyCode::Char(']') => Some(UiCommand::AdjustTimeLimit(1)),
        KeyCode::Char('[') => Some(UiCommand::AdjustTimeLimit(-1)),

        _ => None,
    }
}

/// Map mouse input to UI commands (left button press only).
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<UiCommand> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(UiCommand::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(UiCommand::MoveCursor { d_row: 0, d_col: -1 })
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(UiCommand::MoveCursor { d_row: 0, d_col: 1 })
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(UiCommand::MoveCursor { d_row: -1, d_col: 0 })
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(UiCommand::MoveCursor { d_row: 1, d_col: 0 })
        );
    }

    #[test]
    fn test_select_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(UiCommand::SelectAtCursor)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(UiCommand::SelectAtCursor)
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(UiCommand::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(UiCommand::Reset)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('m'))),
            Some(UiCommand::ToggleMode)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(UiCommand::DismissSummary)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_time_limit_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(UiCommand::AdjustTimeLimit(10))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(UiCommand::AdjustTimeLimit(-10))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(']'))),
            Some(UiCommand::AdjustTimeLimit(1))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('['))),
            Some(UiCommand::AdjustTimeLimit(-1))
        );
    }

    #[test]
    fn test_mouse_left_press_only() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 12, 4)),
            Some(UiCommand::ClickAt { column: 12, row: 4 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 12, 4)),
            None
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 12, 4)),
            None
        );
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::Moved, 1, 1)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
