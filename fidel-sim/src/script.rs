//! Key scripts: a compact text notation for sequences of key presses
//!
//! ```text
//! <LANG> selam <SHIFT> a   # named function keys and single characters
//! "www" U+1218 <-5>        # text keys, code points and raw key codes
//! ```

use std::fmt;

use fidel_core::types::create_key_code_map;
use fidel_core::KeyEvent;

use crate::error::{Result, ScriptError};
use crate::lexer::{Lexer, Token};

/// One step of a key script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptKey {
    /// A decoded key event
    Event(KeyEvent),
    /// A raw host key code, decoded by the engine
    Code(i32),
    /// A field gains focus; preferences are re-read
    Focus,
    /// The focused field goes away
    Blur,
}

impl fmt::Display for ScriptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptKey::Event(KeyEvent::Character(ch)) => write!(f, "{:?}", ch),
            ScriptKey::Event(KeyEvent::Text(text)) => write!(f, "{:?}", text),
            ScriptKey::Event(KeyEvent::Control(key)) => write!(f, "<{:?}>", key),
            ScriptKey::Event(event) => write!(f, "<{:?}>", event),
            ScriptKey::Code(code) => write!(f, "<{}>", code),
            ScriptKey::Focus => write!(f, "<FOCUS>"),
            ScriptKey::Blur => write!(f, "<BLUR>"),
        }
    }
}

/// Parse a key script
pub fn parse_script(input: &str) -> Result<Vec<ScriptKey>> {
    let key_names = create_key_code_map();
    let mut lexer = Lexer::new(input);
    let mut keys = Vec::new();

    while let Some(token) = lexer.next_token()? {
        let offset = lexer.offset();
        let key = match token {
            Token::Key(name) => match name.as_str() {
                "FOCUS" => ScriptKey::Focus,
                "BLUR" => ScriptKey::Blur,
                "SPACE" => ScriptKey::Event(KeyEvent::Character(' ')),
                _ => match key_names.get(name.as_str()) {
                    Some(code) => ScriptKey::Event(code.to_event()),
                    None => return Err(ScriptError::UnknownKey(name, offset)),
                },
            },
            Token::Code(code) => ScriptKey::Code(code.ok_or(ScriptError::InvalidCode(offset))?),
            Token::Unicode(value) => {
                let ch = value
                    .and_then(char::from_u32)
                    .ok_or(ScriptError::InvalidUnicode(offset))?;
                ScriptKey::Event(KeyEvent::Character(ch))
            }
            Token::Text(text) => ScriptKey::Event(KeyEvent::Text(unescape(&text))),
            Token::Escaped(Some(ch)) | Token::Char(Some(ch)) => {
                ScriptKey::Event(KeyEvent::Character(ch))
            }
            Token::Escaped(None) | Token::Char(None) | Token::Comment => {
                return Err(ScriptError::UnexpectedToken {
                    offset,
                    text: input[offset..].chars().take(1).collect(),
                })
            }
        };
        keys.push(key);
    }

    Ok(keys)
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            },
            _ => out.push(ch),
        }
    }
    out
}
