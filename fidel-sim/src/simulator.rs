use std::fmt;

use log::{debug, info};

use fidel_core::engine::{HostAction, HostIo};
use fidel_core::host::{LayoutTable, MemorySink, PulseRecorder};
use fidel_core::{
    EditorAction, FieldInfo, KeyCase, KeyOutcome, KeyboardSession, LayoutRegistry,
    LayoutSelection, PreferenceStore, Preferences,
};

use crate::error::{Result, ScriptError};
use crate::script::ScriptKey;

/// Settings of the simulated field and device
#[derive(Debug, Clone)]
pub struct SimOptions {
    pub action: EditorAction,
    /// Field contents before the first key; the cursor starts at the end
    pub initial_text: String,
    /// Start with a focused field
    pub focused: bool,
    /// The device has a vibration motor
    pub vibrator: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            action: EditorAction::Unspecified,
            initial_text: String::new(),
            focused: true,
            vibrator: true,
        }
    }
}

/// Result of one script step
#[derive(Debug, Clone)]
pub struct Step {
    pub key: ScriptKey,
    pub outcome: KeyOutcome,
    /// View shown after the step
    pub view: LayoutSelection,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12}", self.key.to_string())?;
        if !self.outcome.handled {
            write!(f, " dropped")?;
        }
        if let Some(text) = self.outcome.commit_text() {
            write!(f, " commit {:?}", text)?;
        }
        match self.outcome.action {
            Some(HostAction::DeleteBefore(n)) => write!(f, " delete {}", n)?,
            Some(HostAction::Editor(action)) => write!(f, " action {:?}", action)?,
            Some(HostAction::LineBreak) => write!(f, " line-break")?,
            None => {}
        }
        if self.outcome.pulsed {
            write!(f, " buzz")?;
        }
        if let Some(display) = self.outcome.display {
            write!(f, " -> {:?}", display.layout)?;
            if display.case == KeyCase::Upper {
                write!(f, " (upper)")?;
            }
        }
        Ok(())
    }
}

/// Drives a keyboard session against an in-memory field
pub struct Simulator<S: PreferenceStore> {
    session: KeyboardSession,
    store: S,
    sink: MemorySink,
    haptics: PulseRecorder,
    options: SimOptions,
    focused: bool,
    layouts: LayoutTable<&'static str>,
}

impl<S: PreferenceStore> Simulator<S> {
    pub fn new(store: S, options: SimOptions) -> Self {
        let prefs = Preferences::load(&store);
        let haptics = if options.vibrator {
            PulseRecorder::new()
        } else {
            PulseRecorder::without_vibrator()
        };

        let mut sim = Self {
            session: KeyboardSession::new(prefs),
            store,
            sink: MemorySink::with_text(&options.initial_text),
            haptics,
            focused: false,
            layouts: LayoutTable::new("fidel", "qwerty", "geez-numerals", "latin-symbols"),
            options,
        };
        if sim.options.focused {
            sim.focus();
        }
        sim
    }

    /// A field gains focus; preferences are read fresh from the store
    pub fn focus(&mut self) {
        let prefs = Preferences::load(&self.store);
        let view = self
            .session
            .start_input(prefs, FieldInfo::new(self.options.action));
        self.focused = true;
        info!("Focused field, showing {}", self.describe(view.layout));
    }

    pub fn blur(&mut self) {
        self.focused = false;
        debug!("Field lost focus");
    }

    /// Play one script step
    pub fn press(&mut self, key: &ScriptKey) -> Step {
        let outcome = match key {
            ScriptKey::Focus => {
                self.focus();
                KeyOutcome::layout(Some(self.session.input_view().layout))
            }
            ScriptKey::Blur => {
                self.blur();
                KeyOutcome::layout(None)
            }
            ScriptKey::Event(event) => {
                let mut io = HostIo::new(&mut self.store).with_haptics(&mut self.haptics);
                if self.focused {
                    io = io.with_sink(&mut self.sink);
                }
                self.session.process_key(event.clone(), &mut io)
            }
            ScriptKey::Code(code) => {
                let mut io = HostIo::new(&mut self.store).with_haptics(&mut self.haptics);
                if self.focused {
                    io = io.with_sink(&mut self.sink);
                }
                self.session.process_code(*code, &mut io)
            }
        };

        Step {
            key: key.clone(),
            outcome,
            view: self.view(),
        }
    }

    /// Play a whole script
    pub fn play(&mut self, keys: &[ScriptKey]) -> Vec<Step> {
        keys.iter().map(|key| self.press(key)).collect()
    }

    /// Current contents of the simulated field
    pub fn text(&self) -> &str {
        self.sink.text()
    }

    pub fn sink(&self) -> &MemorySink {
        &self.sink
    }

    /// Number of haptic pulses fired so far
    pub fn pulses(&self) -> usize {
        self.haptics.pulses.len()
    }

    pub fn view(&self) -> LayoutSelection {
        self.session.input_view().layout
    }

    pub fn session(&self) -> &KeyboardSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Human-readable name of a layout selection
    pub fn describe(&self, selection: LayoutSelection) -> String {
        let name = self.layouts.layout(selection.layout);
        match selection.case {
            KeyCase::Upper => format!("{} (upper)", name),
            KeyCase::Lower => name.to_string(),
        }
    }
}

/// Parse a `KEY=true|false` preference assignment
pub fn parse_assignment(input: &str) -> Result<(String, bool)> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ScriptError::InvalidAssignment(input.to_string()))?;
    let key = key.trim();
    let value = match value.trim() {
        "true" | "on" | "1" => true,
        "false" | "off" | "0" => false,
        _ => return Err(ScriptError::InvalidAssignment(input.to_string())),
    };
    if Preferences::default().get(key).is_none() {
        return Err(ScriptError::UnknownPreference(key.to_string()));
    }
    Ok((key.to_string(), value))
}

/// Apply preference assignments to a store
pub fn apply_assignments(store: &mut dyn PreferenceStore, assignments: &[String]) -> Result<()> {
    for assignment in assignments {
        let (key, value) = parse_assignment(assignment)?;
        store.put_bool(&key, value)?;
        debug!("Set {} = {}", key, value);
    }
    Ok(())
}
