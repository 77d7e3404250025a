//! Shared action vocabulary for the guide.
//!
//! Keyboard bindings and clickable buttons both resolve to an `Action`, so
//! the core applies one shape of input regardless of where it came from.

use crate::data::{CompareMode, FanCount, Zone};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything a key press or a click can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // View state
    SelectZone(Zone),
    NextZone,
    PreviousZone,
    ToggleHeatLoad,
    SetFanCount(FanCount),
    SetCompareMode(CompareMode),
    ToggleCompareMode,

    // Page scrolling (frontend-local)
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    Quit,

    // Key not bound
    None,
}

impl Action {
    /// Scrolling is handled by the frontend, not the view state
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown
        )
    }
}

/// Convert KeyEvent to string representation for matching against keybinds
pub fn key_event_to_string(key: KeyEvent) -> String {
    let mut parts = Vec::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match key.code {
        KeyCode::Char(c) => {
            // Shifted letters already arrive uppercase; plain symbols carry no Shift
            if c.is_ascii_alphabetic() || c == ' ' {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase().to_string()
                } else {
                    c.to_string()
                }
            } else {
                parts.retain(|p| *p != "Shift");
                c.to_string()
            }
        }
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => {
            // BackTab is Shift+Tab whether or not the terminal reports the modifier
            if !parts.contains(&"Shift") {
                parts.push("Shift");
            }
            "Tab".to_string()
        }
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => return String::new(),
    };

    parts.push(&key_str);
    normalize_keybind(&parts.join("+"))
}

/// Canonical form of a keybind string: sorted modifiers, then the key
pub fn normalize_keybind(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() {
        return String::new();
    }
    // A lone "+" is the plus key, not a separator
    if s == "+" {
        return s.to_string();
    }

    let mut modifiers = Vec::new();
    let mut key = "";

    for part in s.split('+') {
        match part.trim() {
            "Ctrl" | "Control" | "ctrl" => modifiers.push("Ctrl"),
            "Shift" | "shift" => modifiers.push("Shift"),
            "Alt" | "alt" => modifiers.push("Alt"),
            k => key = k,
        }
    }

    modifiers.sort();
    modifiers.dedup();
    modifiers.push(key);
    modifiers.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_to_string() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_string(key), "Ctrl+c");

        let key = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE);
        assert_eq!(key_event_to_string(key), "h");

        let key = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(key_event_to_string(key), "PageDown");
    }

    #[test]
    fn test_back_tab_is_shift_tab() {
        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_string(key), "Shift+Tab");

        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE);
        assert_eq!(key_event_to_string(key), "Shift+Tab");
    }

    #[test]
    fn test_shifted_symbol_drops_shift() {
        let key = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_string(key), "?");
    }

    #[test]
    fn test_normalize_keybind() {
        assert_eq!(normalize_keybind("Shift+Ctrl+Up"), "Ctrl+Shift+Up");
        assert_eq!(normalize_keybind("Control+a"), "Ctrl+a");
        assert_eq!(normalize_keybind(" q "), "q");
        assert_eq!(normalize_keybind(""), "");
    }

    #[test]
    fn test_scroll_actions() {
        assert!(Action::PageDown.is_scroll());
        assert!(!Action::ToggleHeatLoad.is_scroll());
    }
}
