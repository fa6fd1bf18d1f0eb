//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrows, WASD and HJKL all steer.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let direction = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Direction::Up
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Direction::Down
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Direction::Left
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Direction::Right
        }
        _ => return None,
    };
    Some(GameAction::Turn(direction))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn turn(d: Direction) -> Option<GameAction> {
        Some(GameAction::Turn(d))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), turn(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), turn(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), turn(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), turn(Direction::Right));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('w'))), turn(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('A'))), turn(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('j'))), turn(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('L'))), turn(Direction::Right));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
