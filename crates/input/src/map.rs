//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions during play.
///
/// Digits 1-6 pick the active player's pits counted from their own side,
/// so the same keys work for both players.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(c @ '1'..='6') => Some(GameAction::SelectPit(c as u8 - b'0')),

        KeyCode::Char('u') | KeyCode::Char('U') => Some(GameAction::Undo),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NewGame),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::CycleStyle),

        _ => None,
    }
}

/// Map keyboard input on the setup screen to a pit fill.
///
/// Only the two fills the game offers are accepted.
pub fn handle_setup_key(key: KeyEvent) -> Option<u8> {
    match key.code {
        KeyCode::Char('3') => Some(3),
        KeyCode::Char('4') => Some(4),
        _ => None,
    }
}

/// Check whether a key ends the program.
///
/// Plain `q` always quits; `c` quits only as the Ctrl-C chord.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_pit_keys() {
        for (ch, n) in [('1', 1), ('4', 4), ('6', 6)] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(ch))),
                Some(GameAction::SelectPit(n))
            );
        }

        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('0'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('7'))), None);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('u'))),
            Some(GameAction::Undo)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('N'))),
            Some(GameAction::NewGame)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(GameAction::CycleStyle)
        );
    }

    #[test]
    fn test_setup_keys() {
        assert_eq!(handle_setup_key(KeyEvent::from(KeyCode::Char('3'))), Some(3));
        assert_eq!(handle_setup_key(KeyEvent::from(KeyCode::Char('4'))), Some(4));
        assert_eq!(handle_setup_key(KeyEvent::from(KeyCode::Char('5'))), None);
        assert_eq!(handle_setup_key(KeyEvent::from(KeyCode::Enter)), None);
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
