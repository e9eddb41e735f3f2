//! Output representation for the Fidel engine

use super::layout::LayoutSelection;
use crate::host::EditorAction;

/// Text produced for a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitResult {
    /// Text to commit at the cursor
    pub text: String,
    /// Whether a haptic pulse should accompany the commit
    pub haptic: bool,
}

impl CommitResult {
    /// Output of a character key; always asks for a haptic pulse
    pub fn key(text: String) -> Self {
        Self { text, haptic: true }
    }

    /// Text committed without key feedback
    pub fn silent(text: String) -> Self {
        Self { text, haptic: false }
    }
}

/// Non-text effects sent to the focused field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Characters deleted before the cursor
    DeleteBefore(usize),
    /// The field's declared editor action was performed
    Editor(EditorAction),
    /// Enter press + release was sent
    LineBreak,
}

/// Everything that happened while processing one key event
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// Text committed to the field
    pub commit: Option<CommitResult>,
    /// Layout the view switched to
    pub display: Option<LayoutSelection>,
    /// Other effect on the field
    pub action: Option<HostAction>,
    /// Whether a haptic pulse was requested from the host
    pub pulsed: bool,
    /// False when the event was dropped (no focused field, undecodable code)
    pub handled: bool,
}

impl KeyOutcome {
    /// Event dropped without effect
    pub fn dropped() -> Self {
        Self::default()
    }

    /// Layout state changed
    pub fn layout(display: Option<LayoutSelection>) -> Self {
        Self {
            display,
            handled: true,
            ..Self::default()
        }
    }

    /// Text committed
    pub fn commit(commit: CommitResult) -> Self {
        Self {
            commit: Some(commit),
            handled: true,
            ..Self::default()
        }
    }

    /// Field action performed
    pub fn action(action: HostAction) -> Self {
        Self {
            action: Some(action),
            handled: true,
            ..Self::default()
        }
    }

    /// Committed text, if any
    pub fn commit_text(&self) -> Option<&str> {
        self.commit.as_ref().map(|c| c.text.as_str())
    }
}

/// What the view needs when a field gains focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputView {
    pub layout: LayoutSelection,
    /// Key click sounds
    pub sound_effects: bool,
}
