//! Layout selection for the keyboard view

use super::state::{Page, Script};

/// The four pre-built keyboard layouts
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutId {
    /// Full fidel letters page
    NativeLetters = 0,
    /// QWERTY letters page
    LatinLetters = 1,
    /// Ge'ez numerals and Ethiopic punctuation
    NativeSymbolsOrNumbers = 2,
    /// Latin digits and symbols
    LatinSymbols = 3,
}

impl LayoutId {
    pub const ALL: [LayoutId; 4] = [
        LayoutId::NativeLetters,
        LayoutId::LatinLetters,
        LayoutId::NativeSymbolsOrNumbers,
        LayoutId::LatinSymbols,
    ];

    /// Picks the layout for a script/page combination
    pub fn for_state(script: Script, page: Page) -> Self {
        match (script, page) {
            (Script::Native, Page::Letters) => LayoutId::NativeLetters,
            (Script::Latin, Page::Letters) => LayoutId::LatinLetters,
            (Script::Native, Page::SymbolsOrNumbers) => LayoutId::NativeSymbolsOrNumbers,
            (Script::Latin, Page::SymbolsOrNumbers) => LayoutId::LatinSymbols,
        }
    }

    /// Index into a four-slot layout table
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Case of the key glyphs drawn on the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyCase {
    #[default]
    Lower,
    Upper,
}

/// What the keyboard view should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutSelection {
    pub layout: LayoutId,
    /// Always `Lower` except on the Latin letters page with shift on
    pub case: KeyCase,
}

impl LayoutSelection {
    pub fn new(layout: LayoutId, case: KeyCase) -> Self {
        Self { layout, case }
    }
}
