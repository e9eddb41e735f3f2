//! Input representation for the Fidel engine

/// Keys that change layout state instead of producing text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    /// Amharic <-> Latin
    LanguageSwitch,
    /// Letters <-> symbols/numbers
    PageSwitch,
    /// Upper/lower case on the Latin letters page
    ShiftToggle,
}

/// A key event delivered to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Layout control key
    Control(ControlKey),
    /// A character key
    Character(char),
    /// Delete one character before the cursor
    Delete,
    /// Enter key: run the field's editor action or send a line break
    Submit,
    /// Multi-character key text, committed verbatim
    Text(String),
}

impl KeyEvent {
    /// Creates a character key event
    pub fn from_char(ch: char) -> Self {
        KeyEvent::Character(ch)
    }

    /// Checks if this event only affects layout state
    pub fn is_control(&self) -> bool {
        matches!(self, KeyEvent::Control(_))
    }
}

impl From<ControlKey> for KeyEvent {
    fn from(key: ControlKey) -> Self {
        KeyEvent::Control(key)
    }
}

impl From<char> for KeyEvent {
    fn from(ch: char) -> Self {
        KeyEvent::Character(ch)
    }
}
