//! Fidel keyboard engine
//!
//! Turns key events from the soft keyboard into committed text, layout
//! transitions and host side effects.

mod input;
mod layout;
mod output;
mod resolver;
mod session;
mod state;
pub mod transliteration;

pub use input::{ControlKey, KeyEvent};
pub use layout::{KeyCase, LayoutId, LayoutSelection};
pub use output::{CommitResult, HostAction, InputView, KeyOutcome};
pub use resolver::resolve;
pub use session::{HostIo, KeyboardSession, HAPTIC_PULSE};
pub use state::{LayoutState, Page, Script, Shift, Transition};
pub use transliteration::TransliterationTable;

// Re-export error types
pub use crate::error::{Error, Result};
