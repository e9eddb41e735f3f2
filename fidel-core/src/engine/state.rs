//! Layout state machine
//!
//! The keyboard's toggle state is a single `Copy` value. Control keys never
//! mutate it in place; [`LayoutState::apply`] returns the replacement value
//! together with the layout the view should switch to.

use log::debug;

use super::input::ControlKey;
use super::layout::{KeyCase, LayoutId, LayoutSelection};
use crate::host::Preferences;

/// Glyph system emitted by the letters page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Script {
    /// Ethiopic (Amharic)
    #[default]
    Native,
    Latin,
}

impl Script {
    pub fn toggled(self) -> Self {
        match self {
            Script::Native => Script::Latin,
            Script::Latin => Script::Native,
        }
    }

    pub fn is_latin(self) -> bool {
        self == Script::Latin
    }
}

/// Sub-layout within a script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Letters,
    SymbolsOrNumbers,
}

impl Page {
    pub fn toggled(self) -> Self {
        match self {
            Page::Letters => Page::SymbolsOrNumbers,
            Page::SymbolsOrNumbers => Page::Letters,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shift {
    #[default]
    Off,
    On,
}

impl Shift {
    pub fn toggled(self) -> Self {
        match self {
            Shift::Off => Shift::On,
            Shift::On => Shift::Off,
        }
    }
}

/// Script x page x shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutState {
    pub script: Script,
    pub page: Page,
    /// Stored everywhere, effective only on the Latin letters page
    pub shift: Shift,
}

/// Result of applying a control key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: LayoutState,
    /// `None` when the view does not need to be redrawn
    pub display: Option<LayoutSelection>,
}

impl LayoutState {
    pub fn new(script: Script, page: Page, shift: Shift) -> Self {
        Self { script, page, shift }
    }

    /// Initial state for a session: script and page from preferences, shift off
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self {
            script: if prefs.enable_latin { Script::Latin } else { Script::Native },
            page: if prefs.start_on_numbers { Page::SymbolsOrNumbers } else { Page::Letters },
            shift: Shift::Off,
        }
    }

    /// Re-seed script and page from a fresh snapshot, keeping the in-memory shift
    pub fn reseeded(self, prefs: &Preferences) -> Self {
        Self {
            shift: self.shift,
            ..Self::from_preferences(prefs)
        }
    }

    /// True only on the Latin letters page
    pub fn shift_applies(&self) -> bool {
        self.script == Script::Latin && self.page == Page::Letters
    }

    /// Shift as seen by the user and the resolver
    pub fn effective_shift(&self) -> Shift {
        if self.shift_applies() {
            self.shift
        } else {
            Shift::Off
        }
    }

    /// Layout to show for this state
    pub fn layout_to_display(&self) -> LayoutSelection {
        let case = match self.effective_shift() {
            Shift::On => KeyCase::Upper,
            Shift::Off => KeyCase::Lower,
        };
        LayoutSelection::new(LayoutId::for_state(self.script, self.page), case)
    }

    /// Apply a control key
    pub fn apply(self, key: ControlKey) -> Transition {
        let next = match key {
            ControlKey::LanguageSwitch => Self {
                script: self.script.toggled(),
                ..self
            },
            ControlKey::PageSwitch => Self {
                page: self.page.toggled(),
                ..self
            },
            ControlKey::ShiftToggle if self.shift_applies() => Self {
                shift: self.shift.toggled(),
                ..self
            },
            ControlKey::ShiftToggle => {
                debug!("Shift ignored outside the Latin letters page: {:?}", self);
                return Transition { state: self, display: None };
            }
        };

        debug!("{:?}: {:?} -> {:?}", key, self, next);
        Transition {
            state: next,
            display: Some(next.layout_to_display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_for_each_combination() {
        let cases = [
            (Script::Native, Page::Letters, LayoutId::NativeLetters),
            (Script::Latin, Page::Letters, LayoutId::LatinLetters),
            (Script::Native, Page::SymbolsOrNumbers, LayoutId::NativeSymbolsOrNumbers),
            (Script::Latin, Page::SymbolsOrNumbers, LayoutId::LatinSymbols),
        ];
        for (script, page, expected) in cases {
            let state = LayoutState::new(script, page, Shift::On);
            assert_eq!(state.layout_to_display().layout, expected);
        }
    }

    #[test]
    fn test_upper_case_only_on_latin_letters() {
        let latin = LayoutState::new(Script::Latin, Page::Letters, Shift::On);
        assert_eq!(latin.layout_to_display().case, KeyCase::Upper);

        let native = LayoutState::new(Script::Native, Page::Letters, Shift::On);
        assert_eq!(native.layout_to_display().case, KeyCase::Lower);
        assert_eq!(native.effective_shift(), Shift::Off);
    }

    #[test]
    fn test_language_switch_keeps_stored_shift() {
        let state = LayoutState::new(Script::Latin, Page::Letters, Shift::On);

        let t = state.apply(ControlKey::LanguageSwitch);
        assert_eq!(t.state, LayoutState::new(Script::Native, Page::Letters, Shift::On));
        assert_eq!(
            t.display,
            Some(LayoutSelection::new(LayoutId::NativeLetters, KeyCase::Lower))
        );

        let t = t.state.apply(ControlKey::LanguageSwitch);
        assert_eq!(t.state, state);
        assert_eq!(
            t.display,
            Some(LayoutSelection::new(LayoutId::LatinLetters, KeyCase::Upper))
        );
    }

    #[test]
    fn test_reseed_keeps_shift() {
        let state = LayoutState::new(Script::Latin, Page::Letters, Shift::On);
        let prefs = Preferences {
            enable_latin: false,
            start_on_numbers: true,
            ..Preferences::default()
        };
        assert_eq!(
            state.reseeded(&prefs),
            LayoutState::new(Script::Native, Page::SymbolsOrNumbers, Shift::On)
        );
    }
}
