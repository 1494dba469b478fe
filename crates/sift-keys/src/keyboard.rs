//! Key press types for the confirmation prompt.
//!
//! This module provides a small key model: a [`Key`] code, a set of
//! [`Modifiers`], and the combined [`KeyPress`]. Crossterm events convert
//! into these types; everything above the console seam works purely in
//! terms of them.

use bitflags::bitflags;
use std::fmt;

/// A key on the keyboard, reduced to what a single-line prompt can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A regular character key.
    Char(char),
    /// Escape key.
    Esc,
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Function key F1-F24.
    F(u8),
    /// Any key this model cannot represent.
    Null,
}

impl Key {
    /// Returns the display name for this key, as used in generated help text.
    ///
    /// The space character renders as `SPC` so it is visible in a key list.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Key::Char(' ') => "SPC".to_string(),
            Key::Char(c) => c.to_string(),
            Key::Esc => "ESC".to_string(),
            Key::Enter => "RET".to_string(),
            Key::Tab => "TAB".to_string(),
            Key::Backspace => "backspace".to_string(),
            Key::Delete => "delete".to_string(),
            Key::F(n) => format!("f{n}"),
            Key::Null => "null".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode as CT;
        match code {
            CT::Char(c) => Key::Char(c),
            CT::Esc => Key::Esc,
            CT::Enter => Key::Enter,
            CT::Tab => Key::Tab,
            CT::Backspace => Key::Backspace,
            CT::Delete => Key::Delete,
            CT::F(n) => Key::F(n),
            _ => Key::Null,
        }
    }
}

bitflags! {
    /// Keyboard modifier flags.
    ///
    /// Multiple modifiers can be combined using bitwise OR.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// No modifiers pressed.
        const NONE = 0b0000_0000;
        /// Shift modifier.
        const SHIFT = 0b0000_0001;
        /// Control modifier.
        const CONTROL = 0b0000_0010;
        /// Alt/Option modifier.
        const ALT = 0b0000_0100;
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.contains(Modifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.contains(Modifiers::ALT) {
            parts.push("Alt");
        }
        if self.contains(Modifiers::SHIFT) {
            parts.push("Shift");
        }
        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        let mut result = Modifiers::NONE;
        if mods.contains(crossterm::event::KeyModifiers::SHIFT) {
            result |= Modifiers::SHIFT;
        }
        if mods.contains(crossterm::event::KeyModifiers::CONTROL) {
            result |= Modifiers::CONTROL;
        }
        if mods.contains(crossterm::event::KeyModifiers::ALT) {
            result |= Modifiers::ALT;
        }
        result
    }
}

/// A complete key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key that was pressed.
    pub key: Key,
    /// Active modifiers during the press.
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// Creates a key press with explicit modifiers.
    #[must_use]
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A character press with no modifiers.
    #[must_use]
    pub fn plain(c: char) -> Self {
        Self::new(Key::Char(c), Modifiers::NONE)
    }

    /// A Ctrl+character chord.
    #[must_use]
    pub fn ctrl(c: char) -> Self {
        Self::new(Key::Char(c), Modifiers::CONTROL)
    }

    /// A non-character key with no modifiers.
    #[must_use]
    pub fn bare(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Returns true if this press is Ctrl plus the given character,
    /// matching case-insensitively.
    #[must_use]
    pub fn is_ctrl(&self, c: char) -> bool {
        if self.modifiers != Modifiers::CONTROL {
            return false;
        }
        match self.key {
            Key::Char(k) => k.eq_ignore_ascii_case(&c),
            _ => false,
        }
    }

    /// Returns a descriptive string for this press, e.g. `y`, `SPC`,
    /// `Ctrl+g`, `ESC`.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.modifiers.contains(Modifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.contains(Modifiers::ALT) {
            parts.push("Alt".to_string());
        }
        if self.modifiers.contains(Modifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        parts.push(self.key.name());
        parts.join("+")
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl From<crossterm::event::KeyEvent> for KeyPress {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        let key: Key = event.code.into();
        let mut modifiers: Modifiers = event.modifiers.into();
        // For character keys the case already carries shift; keep the flag
        // only for non-character keys so `Y` and `Shift+Y` compare equal.
        if matches!(key, Key::Char(_)) {
            modifiers -= Modifiers::SHIFT;
        }
        Self { key, modifiers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_name() {
        assert_eq!(Key::Char('y').name(), "y");
        assert_eq!(Key::Char(' ').name(), "SPC");
        assert_eq!(Key::Esc.name(), "ESC");
        assert_eq!(Key::Delete.name(), "delete");
        assert_eq!(Key::F(1).name(), "f1");
    }

    #[test]
    fn test_describe() {
        assert_eq!(KeyPress::plain('y').describe(), "y");
        assert_eq!(KeyPress::ctrl('g').describe(), "Ctrl+g");
        assert_eq!(KeyPress::bare(Key::Esc).describe(), "ESC");
        assert_eq!(KeyPress::plain(' ').describe(), "SPC");
    }

    #[test]
    fn test_is_ctrl_case_insensitive() {
        assert!(KeyPress::ctrl('g').is_ctrl('g'));
        assert!(KeyPress::ctrl('G').is_ctrl('g'));
        assert!(!KeyPress::plain('g').is_ctrl('g'));
    }

    #[test]
    fn test_modifiers_display() {
        assert_eq!(Modifiers::CONTROL.to_string(), "Ctrl");
        assert_eq!(
            (Modifiers::CONTROL | Modifiers::SHIFT).to_string(),
            "Ctrl+Shift"
        );
        assert_eq!(Modifiers::NONE.to_string(), "None");
    }

    #[test]
    fn test_from_crossterm_drops_shift_on_chars() {
        let event = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('Y'),
            crossterm::event::KeyModifiers::SHIFT,
        );
        let press: KeyPress = event.into();
        assert_eq!(press, KeyPress::plain('Y'));
    }

    #[test]
    fn test_from_crossterm_keeps_other_modifiers() {
        let event = crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('g'),
            crossterm::event::KeyModifiers::CONTROL,
        );
        let press: KeyPress = event.into();
        assert!(press.is_ctrl('g'));
    }
}
