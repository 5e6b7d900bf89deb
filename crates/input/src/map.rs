//! Key mapping from terminal events to input events.

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to input events.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(InputEvent::ClearWord)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),
            _ => None,
        };
    }

    match key.code {
        // Word boundaries
        KeyCode::Char(' ') | KeyCode::Tab => Some(InputEvent::Submit),
        KeyCode::Enter => Some(InputEvent::Enter),

        // Editing
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Char(c) if !c.is_control() => Some(InputEvent::Char(c)),

        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Letters are words here, so quitting is bound to Esc and Ctrl+C only.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
