//! Error types for the Fidel keyboard core
//!
//! Key handling itself never fails; these errors only come from the
//! collaborator edges (preference files, undecodable host key codes).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown key code: {0}")]
    UnknownKeyCode(i32),

    #[error("Preference file parse error: {0}")]
    PreferenceParse(#[from] toml::de::Error),

    #[error("Preference file serialize error: {0}")]
    PreferenceSerialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
