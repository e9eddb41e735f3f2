pub mod types;
pub mod error;
pub mod engine;
pub mod host;
pub mod ffi;

pub use types::*;

// Re-export commonly used types
pub use types::key_codes::KeyCode;
pub use error::{Error, Result};
pub use engine::{
    KeyboardSession, KeyEvent, ControlKey, KeyOutcome, CommitResult, InputView,
    LayoutState, LayoutSelection, LayoutId, KeyCase, Script, Page, Shift,
};
pub use host::{
    PreferenceStore, Preferences, TextSink, HapticService, LayoutRegistry,
    EditorAction, FieldInfo, KeyStroke,
};
