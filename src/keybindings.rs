use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::apps::DECLARED_WINDOWS;
use crate::window::WindowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    /// Escape: close whichever window is active.
    CloseActiveWindow,
    ToggleTheme,
    ToggleStartMenu,
    /// Alt+digit: open the window bound to that digit.
    OpenWindow(WindowId),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Quit => write!(f, "Quit"),
            Action::CloseActiveWindow => write!(f, "Close active window"),
            Action::ToggleTheme => write!(f, "Toggle theme"),
            Action::ToggleStartMenu => write!(f, "Toggle start menu"),
            Action::OpenWindow(id) => write!(f, "Open {id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.map
            .get(&action)
            .is_some_and(|list| list.iter().any(|combo| combo.matches(key)))
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        for (action, list) in &self.map {
            if list.iter().any(|combo| combo.matches(key)) {
                return Some(*action);
            }
        }
        None
    }

    /// Return the display strings for all combos mapped to `action`.
    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(|combo| combo.display()).collect())
            .unwrap_or_default()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut kb = Self::new();
        kb.add(
            Action::Quit,
            KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        kb.add(
            Action::CloseActiveWindow,
            KeyCombo::new(KeyCode::Esc, KeyModifiers::NONE),
        );
        kb.add(
            Action::ToggleTheme,
            KeyCombo::new(KeyCode::Char('t'), KeyModifiers::ALT),
        );
        kb.add(
            Action::ToggleStartMenu,
            KeyCombo::new(KeyCode::Char(' '), KeyModifiers::ALT),
        );
        for def in DECLARED_WINDOWS {
            kb.add(
                Action::OpenWindow(def.id),
                KeyCombo::new(KeyCode::Char(def.shortcut), KeyModifiers::ALT),
            );
        }
        kb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_quit() {
        let kb = KeyBindings::default();
        let ev = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(kb.matches(Action::Quit, &ev));
    }

    #[test]
    fn alt_digits_open_declared_windows() {
        let kb = KeyBindings::default();
        let ev = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT);
        assert_eq!(
            kb.action_for_key(&ev),
            Some(Action::OpenWindow(WindowId("about")))
        );
        // plain digits (no Alt) are not shortcuts
        let plain = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(kb.action_for_key(&plain), None);
    }

    #[test]
    fn escape_maps_to_close_active() {
        let kb = KeyBindings::default();
        let ev = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(kb.action_for_key(&ev), Some(Action::CloseActiveWindow));
    }
}
