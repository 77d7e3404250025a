//! Input routing
//!
//! Routes keyboard input to an `Action`. Esc and Ctrl+C always quit so the
//! terminal can be recovered even with a broken keybind file; everything
//! else goes through the configured keybinds.

use crate::config::Keybinds;
use crate::core::actions::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Route a key event to an Action
pub fn route_input(key: KeyEvent, keybinds: &Keybinds) -> Action {
    if is_reserved_quit(&key) {
        return Action::Quit;
    }

    keybinds.resolve_action(key)
}

fn is_reserved_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Zone;

    #[test]
    fn test_reserved_quit_keys() {
        let keybinds = Keybinds::default();
        assert_eq!(
            route_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &keybinds),
            Action::Quit
        );
        assert_eq!(
            route_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &keybinds),
            Action::Quit
        );
    }

    #[test]
    fn test_reserved_keys_win_over_keybinds() {
        let keybinds = Keybinds {
            zone_side: "Esc".to_string(),
            ..Keybinds::default()
        };
        assert_eq!(
            route_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &keybinds),
            Action::Quit
        );
    }

    #[test]
    fn test_plain_c_uses_keybinds() {
        let keybinds = Keybinds::default();
        assert_eq!(
            route_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE), &keybinds),
            Action::ToggleCompareMode
        );
        assert_eq!(
            route_input(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE), &keybinds),
            Action::SelectZone(Zone::Bottom)
        );
    }
}
