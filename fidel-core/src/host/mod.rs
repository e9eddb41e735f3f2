//! Host collaborators
//!
//! The engine never talks to a platform directly. Text fields, vibration,
//! preference storage and layout descriptors are reached through the traits
//! in this module; in-memory implementations back the tests and the
//! simulator.

mod haptics;
mod layouts;
mod prefs;
mod sink;

pub use haptics::{HapticService, PulseRecorder};
pub use layouts::{LayoutRegistry, LayoutTable};
pub use prefs::{
    MemoryStore, PreferenceStore, Preferences, TomlStore, PREF_ENABLE_LATIN,
    PREF_ENABLE_PHONETIC, PREF_ENABLE_SOUND, PREF_ENABLE_VIBRATION, PREF_START_ON_NUMBERS,
};
pub use sink::{EditorAction, FieldInfo, KeyStroke, MemorySink, TextSink};
