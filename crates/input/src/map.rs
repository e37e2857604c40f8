//! Key mapping from terminal events to title keys.

use crate::types::{Key, KeyInput};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a terminal key code to a title key. Unrecognized keys map to `Key::Other`.
pub fn map_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Key::W,
            'a' => Key::A,
            's' => Key::S,
            'd' => Key::D,
            ' ' => Key::Space,
            'f' => Key::F,
            'q' => Key::Q,
            'r' => Key::R,
            _ => Key::Other,
        },
        _ => Key::Other,
    }
}

/// Map a terminal key event to a key transition.
///
/// Terminal auto-repeat is ignored; titles see one down per physical press.
/// Most terminals never report releases, so titles act on key-down only.
pub fn map_key_event(key: KeyEvent) -> Option<KeyInput> {
    let mapped = map_key_code(key.code);
    match key.kind {
        KeyEventKind::Press => Some(KeyInput::down(mapped)),
        KeyEventKind::Release => Some(KeyInput::up(mapped)),
        KeyEventKind::Repeat => None,
    }
}

/// Check if key should abort the program regardless of title (Ctrl+C).
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_arrow_and_wasd_keys() {
        assert_eq!(map_key_code(KeyCode::Left), Key::Left);
        assert_eq!(map_key_code(KeyCode::Char('w')), Key::W);
        assert_eq!(map_key_code(KeyCode::Char('A')), Key::A);
        assert_eq!(map_key_code(KeyCode::Char('S')), Key::S);
        assert_eq!(map_key_code(KeyCode::Char('d')), Key::D);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map_key_code(KeyCode::Char(' ')), Key::Space);
        assert_eq!(map_key_code(KeyCode::Char('F')), Key::F);
        assert_eq!(map_key_code(KeyCode::Char('r')), Key::R);
        assert_eq!(map_key_code(KeyCode::Char('q')), Key::Q);
        assert_eq!(map_key_code(KeyCode::Esc), Key::Escape);
        assert_eq!(map_key_code(KeyCode::Char('x')), Key::Other);
        assert_eq!(map_key_code(KeyCode::Tab), Key::Other);
    }

    #[test]
    fn test_event_kinds() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Up)),
            Some(KeyInput::down(Key::Up))
        );
        assert_eq!(
            map_key_event(with_kind(KeyCode::Up, KeyEventKind::Release)),
            Some(KeyInput::up(Key::Up))
        );
        assert_eq!(
            map_key_event(with_kind(KeyCode::Up, KeyEventKind::Repeat)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
    }
}
