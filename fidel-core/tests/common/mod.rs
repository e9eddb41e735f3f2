//! Shared helpers for the integration tests

#![allow(dead_code)]

use fidel_core::engine::{HostIo, KeyOutcome, KeyboardSession};
use fidel_core::host::{MemorySink, MemoryStore, PulseRecorder};
use fidel_core::{ControlKey, EditorAction, FieldInfo, KeyEvent, LayoutState, Page, Preferences, Script, Shift};

/// A session wired to in-memory host collaborators
pub struct Harness {
    pub session: KeyboardSession,
    pub store: MemoryStore,
    pub sink: MemorySink,
    pub haptics: PulseRecorder,
    /// When false, key events run without a focused field
    pub focused: bool,
}

impl Harness {
    pub fn new(prefs: Preferences) -> Self {
        Self::with_store(prefs, MemoryStore::new())
    }

    pub fn with_store(prefs: Preferences, store: MemoryStore) -> Self {
        let mut session = KeyboardSession::new(prefs);
        session.start_input(prefs, FieldInfo::default());
        Self {
            session,
            store,
            sink: MemorySink::new(),
            haptics: PulseRecorder::new(),
            focused: true,
        }
    }

    /// Focus a field declaring `action`
    pub fn focus(&mut self, prefs: Preferences, action: EditorAction) {
        self.session.start_input(prefs, FieldInfo::new(action));
        self.focused = true;
    }

    pub fn press(&mut self, event: impl Into<KeyEvent>) -> KeyOutcome {
        let mut io = HostIo::new(&mut self.store).with_haptics(&mut self.haptics);
        if self.focused {
            io = io.with_sink(&mut self.sink);
        }
        self.session.process_key(event.into(), &mut io)
    }

    pub fn press_code(&mut self, code: i32) -> KeyOutcome {
        let mut io = HostIo::new(&mut self.store).with_haptics(&mut self.haptics);
        if self.focused {
            io = io.with_sink(&mut self.sink);
        }
        self.session.process_code(code, &mut io)
    }

    /// Type each character of `keys` and return the committed pieces
    pub fn type_str(&mut self, keys: &str) -> Vec<String> {
        keys.chars()
            .filter_map(|ch| self.press(ch).commit.map(|c| c.text))
            .collect()
    }

    pub fn control(&mut self, key: ControlKey) -> KeyOutcome {
        self.press(key)
    }

    pub fn text(&self) -> &str {
        self.sink.text()
    }

    pub fn state(&self) -> LayoutState {
        self.session.state()
    }
}

/// Preferences with phonetic mode set and everything else default
pub fn phonetic(enabled: bool) -> Preferences {
    Preferences {
        enable_phonetic: enabled,
        ..Preferences::default()
    }
}

/// Preferences starting on the Latin letters page
pub fn latin(phonetic: bool) -> Preferences {
    Preferences {
        enable_latin: true,
        enable_phonetic: phonetic,
        ..Preferences::default()
    }
}

pub fn state(script: Script, page: Page, shift: Shift) -> LayoutState {
    LayoutState::new(script, page, shift)
}

/// Every combination of the three toggles
pub fn all_states() -> Vec<LayoutState> {
    let mut states = Vec::new();
    for script in [Script::Native, Script::Latin] {
        for page in [Page::Letters, Page::SymbolsOrNumbers] {
            for shift in [Shift::Off, Shift::On] {
                states.push(LayoutState::new(script, page, shift));
            }
        }
    }
    states
}

/// A sample of keys across the printable set and beyond
pub fn sample_chars() -> Vec<char> {
    let mut chars: Vec<char> = ('a'..='z').chain('A'..='Z').chain('0'..='9').collect();
    chars.extend(['.', ',', '?', '!', ' ', '@', '#', 'ሀ', 'መ', '፩', '።', 'é', 'ß', '\u{7f}', '\0']);
    chars
}
