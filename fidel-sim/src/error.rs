use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Unexpected input '{text}' at offset {offset}")]
    UnexpectedToken { offset: usize, text: String },

    #[error("Unknown key name <{0}> at offset {1}")]
    UnknownKey(String, usize),

    #[error("Invalid key code at offset {0}")]
    InvalidCode(usize),

    #[error("Invalid Unicode scalar at offset {0}")]
    InvalidUnicode(usize),

    #[error("Invalid preference assignment '{0}', expected KEY=true|false")]
    InvalidAssignment(String),

    #[error("Unknown preference '{0}'")]
    UnknownPreference(String),

    #[error("Engine error: {0}")]
    Engine(#[from] fidel_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScriptError>;
