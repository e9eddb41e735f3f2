use std::collections::HashMap;

use crate::engine::{ControlKey, KeyEvent};
use crate::error::{Error, Result};

/// Special key codes delivered by the soft keyboard host.
///
/// Non-negative codes are Unicode scalar values of character keys; the
/// negative codes below are the layout's function keys.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Shift = -1,            // shift key on the Latin letters page
    ModeChange = -2,       // letters <-> symbols/numbers
    Done = -4,             // enter/submit
    Delete = -5,           // backspace
    LanguageSwitch = -101, // globe key, Amharic <-> Latin
}

impl KeyCode {
    /// Look up a special key code
    pub fn from_raw(code: i32) -> Option<Self> {
        match code {
            -1 => Some(KeyCode::Shift),
            -2 => Some(KeyCode::ModeChange),
            -4 => Some(KeyCode::Done),
            -5 => Some(KeyCode::Delete),
            -101 => Some(KeyCode::LanguageSwitch),
            _ => None,
        }
    }

    /// Gets the raw value
    pub fn raw(self) -> i32 {
        self as i32
    }

    /// The engine event this function key produces
    pub fn to_event(self) -> KeyEvent {
        match self {
            KeyCode::Shift => KeyEvent::Control(ControlKey::ShiftToggle),
            KeyCode::ModeChange => KeyEvent::Control(ControlKey::PageSwitch),
            KeyCode::LanguageSwitch => KeyEvent::Control(ControlKey::LanguageSwitch),
            KeyCode::Done => KeyEvent::Submit,
            KeyCode::Delete => KeyEvent::Delete,
        }
    }

    /// Decode a raw host key code into an engine event.
    ///
    /// Fails only for negative codes that are not function keys and for
    /// values that are not Unicode scalar values (e.g. lone surrogates).
    pub fn decode(code: i32) -> Result<KeyEvent> {
        if let Some(key) = Self::from_raw(code) {
            return Ok(key.to_event());
        }

        u32::try_from(code)
            .ok()
            .and_then(char::from_u32)
            .map(KeyEvent::Character)
            .ok_or(Error::UnknownKeyCode(code))
    }
}

impl From<KeyCode> for i32 {
    fn from(key: KeyCode) -> Self {
        key.raw()
    }
}

/// Names accepted for function keys in key scripts, e.g. `<LANG>`
pub fn create_key_code_map() -> HashMap<&'static str, KeyCode> {
    let mut map = HashMap::new();

    map.insert("SHIFT", KeyCode::Shift);

    map.insert("PAGE", KeyCode::ModeChange);
    map.insert("MODE", KeyCode::ModeChange);
    map.insert("SYMBOLS", KeyCode::ModeChange);

    map.insert("DONE", KeyCode::Done);
    map.insert("ENTER", KeyCode::Done);
    map.insert("RETURN", KeyCode::Done);

    map.insert("DELETE", KeyCode::Delete);
    map.insert("DEL", KeyCode::Delete);
    map.insert("BACK", KeyCode::Delete);
    map.insert("BACKSPACE", KeyCode::Delete);

    map.insert("LANG", KeyCode::LanguageSwitch);
    map.insert("GLOBE", KeyCode::LanguageSwitch);

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_keys_decode_to_events() {
        assert_eq!(
            KeyCode::decode(-101).unwrap(),
            KeyEvent::Control(ControlKey::LanguageSwitch)
        );
        assert_eq!(KeyCode::decode(-2).unwrap(), KeyEvent::Control(ControlKey::PageSwitch));
        assert_eq!(KeyCode::decode(-1).unwrap(), KeyEvent::Control(ControlKey::ShiftToggle));
        assert_eq!(KeyCode::decode(-5).unwrap(), KeyEvent::Delete);
        assert_eq!(KeyCode::decode(-4).unwrap(), KeyEvent::Submit);
    }

    #[test]
    fn test_character_codes() {
        assert_eq!(KeyCode::decode('m' as i32).unwrap(), KeyEvent::Character('m'));
        assert_eq!(KeyCode::decode(0x1218).unwrap(), KeyEvent::Character('መ'));
        assert_eq!(KeyCode::decode(0).unwrap(), KeyEvent::Character('\0'));
    }

    #[test]
    fn test_unknown_codes() {
        assert!(matches!(KeyCode::decode(-3), Err(Error::UnknownKeyCode(-3))));
        assert!(matches!(KeyCode::decode(0xD800), Err(Error::UnknownKeyCode(0xD800))));
    }

    #[test]
    fn test_name_map_round_trip() {
        let map = create_key_code_map();
        for (name, key) in &map {
            assert_eq!(KeyCode::from_raw(key.raw()), Some(*key), "{}", name);
        }
        assert_eq!(map.get("LANG"), Some(&KeyCode::LanguageSwitch));
    }
}
