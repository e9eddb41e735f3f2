//! Character resolver

use super::output::CommitResult;
use super::state::{LayoutState, Page, Script, Shift};
use super::transliteration::TransliterationTable;
use crate::host::Preferences;

/// Decide the text committed for a character key.
///
/// Rules, first match wins:
/// 1. symbols/numbers page: the raw character
/// 2. native script: the raw character (the fidel layout already emits glyphs)
/// 3. Latin letters page: the phonetic glyph when phonetic mode is on,
///    otherwise the character, upper-cased when shift is on
pub fn resolve(ch: char, state: &LayoutState, prefs: &Preferences) -> CommitResult {
    if state.page == Page::SymbolsOrNumbers || state.script == Script::Native {
        return CommitResult::key(ch.to_string());
    }

    if prefs.enable_phonetic {
        let table = TransliterationTable::new();
        return CommitResult::key(ch.to_lowercase().map(|c| table.lookup(c)).collect());
    }

    if ch.is_alphabetic() && state.effective_shift() == Shift::On {
        CommitResult::key(ch.to_uppercase().collect())
    } else {
        CommitResult::key(ch.to_string())
    }
}
