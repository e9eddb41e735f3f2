use std::time::Duration;

use log::{debug, warn};

use super::{
    input::{ControlKey, KeyEvent},
    output::{CommitResult, HostAction, InputView, KeyOutcome},
    resolver::resolve,
    state::LayoutState,
};
use crate::host::{
    FieldInfo, HapticService, KeyStroke, PreferenceStore, Preferences, TextSink, PREF_ENABLE_LATIN,
};
use crate::types::KeyCode;

/// Length of the key-press vibration
pub const HAPTIC_PULSE: Duration = Duration::from_millis(30);

/// Host collaborators available while handling one key event
pub struct HostIo<'a> {
    /// Focused field; `None` when nothing has focus
    pub sink: Option<&'a mut dyn TextSink>,
    /// Vibration service; `None` when the platform has none
    pub haptics: Option<&'a mut dyn HapticService>,
    /// Receives the language write-back
    pub store: &'a mut dyn PreferenceStore,
}

impl<'a> HostIo<'a> {
    pub fn new(store: &'a mut dyn PreferenceStore) -> Self {
        Self {
            sink: None,
            haptics: None,
            store,
        }
    }

    pub fn with_sink(mut self, sink: &'a mut dyn TextSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_haptics(mut self, haptics: &'a mut dyn HapticService) -> Self {
        self.haptics = Some(haptics);
        self
    }
}

/// One input session of the keyboard
///
/// Owns the layout state for as long as the keyboard is shown. Preferences
/// are never read behind its back: a snapshot is handed over at creation and
/// again whenever a new field gains focus.
#[derive(Debug, Clone)]
pub struct KeyboardSession {
    state: LayoutState,
    prefs: Preferences,
    field: FieldInfo,
}

impl KeyboardSession {
    /// Create a session seeded from a preference snapshot
    pub fn new(prefs: Preferences) -> Self {
        Self {
            state: LayoutState::from_preferences(&prefs),
            prefs,
            field: FieldInfo::default(),
        }
    }

    /// A new field gained focus.
    ///
    /// Script and page are re-seeded from the fresh snapshot; shift keeps its
    /// in-memory value.
    pub fn start_input(&mut self, prefs: Preferences, field: FieldInfo) -> InputView {
        self.prefs = prefs;
        self.field = field;
        self.state = self.state.reseeded(&prefs);
        debug!("Start input {:?} with state {:?}", field, self.state);
        self.input_view()
    }

    /// Layout and sound settings for the view
    pub fn input_view(&self) -> InputView {
        InputView {
            layout: self.state.layout_to_display(),
            sound_effects: self.prefs.enable_sound,
        }
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn field(&self) -> FieldInfo {
        self.field
    }

    /// Process a raw key code from the host; undecodable codes are dropped
    pub fn process_code(&mut self, code: i32, io: &mut HostIo<'_>) -> KeyOutcome {
        match KeyCode::decode(code) {
            Ok(event) => self.process_key(event, io),
            Err(e) => {
                debug!("Dropping key: {}", e);
                KeyOutcome::dropped()
            }
        }
    }

    /// Process a key event
    pub fn process_key(&mut self, event: KeyEvent, io: &mut HostIo<'_>) -> KeyOutcome {
        // Layout keys work even without a focused field
        if let KeyEvent::Control(key) = event {
            return self.handle_control(key, io);
        }

        let sink = match io.sink.as_mut() {
            Some(sink) => sink,
            None => {
                debug!("No focused field, dropping {:?}", event);
                return KeyOutcome::dropped();
            }
        };

        match event {
            KeyEvent::Character(ch) => {
                let commit = resolve(ch, &self.state, &self.prefs);
                sink.commit_text(&commit.text);
                let pulsed = commit.haptic && self.pulse(io.haptics.as_deref_mut());
                KeyOutcome {
                    pulsed,
                    ..KeyOutcome::commit(commit)
                }
            }
            KeyEvent::Text(text) => {
                sink.commit_text(&text);
                KeyOutcome::commit(CommitResult::silent(text))
            }
            KeyEvent::Delete => {
                sink.delete_before_cursor(1);
                KeyOutcome::action(HostAction::DeleteBefore(1))
            }
            KeyEvent::Submit => {
                let action = self.field.action;
                if action.submits() {
                    sink.perform_editor_action(action);
                    KeyOutcome::action(HostAction::Editor(action))
                } else {
                    sink.send_key(KeyStroke::EnterDown);
                    sink.send_key(KeyStroke::EnterUp);
                    KeyOutcome::action(HostAction::LineBreak)
                }
            }
            // handled above
            KeyEvent::Control(_) => KeyOutcome::dropped(),
        }
    }

    fn handle_control(&mut self, key: ControlKey, io: &mut HostIo<'_>) -> KeyOutcome {
        let transition = self.state.apply(key);
        self.state = transition.state;

        if key == ControlKey::LanguageSwitch {
            let latin = self.state.script.is_latin();
            self.prefs.enable_latin = latin;
            if let Err(e) = io.store.put_bool(PREF_ENABLE_LATIN, latin) {
                warn!("Failed to persist {}: {}", PREF_ENABLE_LATIN, e);
            }
        }

        KeyOutcome::layout(transition.display)
    }

    fn pulse(&self, haptics: Option<&mut (dyn HapticService + '_)>) -> bool {
        if !self.prefs.enable_vibration {
            return false;
        }
        match haptics {
            Some(haptics) if haptics.has_vibrator() => {
                haptics.vibrate(HAPTIC_PULSE);
                true
            }
            _ => false,
        }
    }

    /// Key press hook; feedback is handled on commit
    pub fn on_press(&mut self, _code: i32) {}

    /// Key release hook
    pub fn on_release(&mut self, _code: i32) {}

    /// Swipe gestures are not used
    pub fn on_swipe(&mut self) {}
}
