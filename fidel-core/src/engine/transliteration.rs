//! Latin -> Ethiopic phonetic table
//!
//! Maps a base Latin consonant to the first-order (ä) syllable of the
//! matching fidel series. One key, one glyph; no consonant+vowel combining.

/// Latin keys with a fidel mapping, in table order
pub const BASE_CONSONANTS: [(char, char); 16] = [
    ('h', 'ሀ'),
    ('l', 'ለ'),
    ('m', 'መ'),
    ('s', 'ሰ'),
    ('r', 'ረ'),
    ('b', 'በ'),
    ('t', 'ተ'),
    ('n', 'ነ'),
    ('k', 'ከ'),
    ('w', 'ወ'),
    ('z', 'ዘ'),
    ('y', 'የ'),
    ('d', 'ደ'),
    ('g', 'ገ'),
    ('f', 'ፈ'),
    ('p', 'ፐ'),
];

/// The phonetic table
#[derive(Debug, Clone, Copy, Default)]
pub struct TransliterationTable;

impl TransliterationTable {
    pub fn new() -> Self {
        Self
    }

    /// Case-insensitive lookup; unmapped characters come back unchanged
    pub fn lookup(&self, ch: char) -> char {
        match ch.to_ascii_lowercase() {
            'h' => 'ሀ',
            'l' => 'ለ',
            'm' => 'መ',
            's' => 'ሰ',
            'r' => 'ረ',
            'b' => 'በ',
            't' => 'ተ',
            'n' => 'ነ',
            'k' => 'ከ',
            'w' => 'ወ',
            'z' => 'ዘ',
            'y' => 'የ',
            'd' => 'ደ',
            'g' => 'ገ',
            'f' => 'ፈ',
            'p' => 'ፐ',
            _ => ch,
        }
    }

    /// Checks if a key has a fidel mapping
    pub fn contains(&self, ch: char) -> bool {
        self.lookup(ch) != ch
    }

    /// All mapped pairs
    pub fn entries(&self) -> impl Iterator<Item = (char, char)> {
        BASE_CONSONANTS.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_agree_with_lookup() {
        let table = TransliterationTable::new();
        for (latin, fidel) in table.entries() {
            assert_eq!(table.lookup(latin), fidel);
            assert_eq!(table.lookup(latin.to_ascii_uppercase()), fidel);
        }
        assert_eq!(table.entries().count(), 16);
    }

    #[test]
    fn test_identity_fallback() {
        let table = TransliterationTable::new();
        for ch in ['a', 'e', 'q', 'X', '1', ' ', 'ሀ', 'é'] {
            assert_eq!(table.lookup(ch), ch);
            assert!(!table.contains(ch));
        }
    }
}
