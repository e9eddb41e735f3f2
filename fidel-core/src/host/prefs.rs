//! User preferences and their storage

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const PREF_ENABLE_LATIN: &str = "enable-latin";
pub const PREF_START_ON_NUMBERS: &str = "start-on-numbers";
pub const PREF_ENABLE_SOUND: &str = "enable-sound";
pub const PREF_ENABLE_VIBRATION: &str = "enable-vibration";
pub const PREF_ENABLE_PHONETIC: &str = "enable-phonetic";

/// Snapshot of the user's keyboard settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Preferences {
    /// Start on (and remember) the Latin layout
    pub enable_latin: bool,
    /// Start on the symbols/numbers page
    pub start_on_numbers: bool,
    /// Key click sounds
    pub enable_sound: bool,
    /// Haptic pulse on character keys
    pub enable_vibration: bool,
    /// Latin letters produce fidel through the phonetic table
    pub enable_phonetic: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            enable_latin: false,
            start_on_numbers: false,
            enable_sound: true,
            enable_vibration: true,
            enable_phonetic: false,
        }
    }
}

impl Preferences {
    /// Read all five settings, falling back to defaults for missing keys
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let defaults = Self::default();
        let prefs = Self {
            enable_latin: store.get_bool(PREF_ENABLE_LATIN).unwrap_or(defaults.enable_latin),
            start_on_numbers: store
                .get_bool(PREF_START_ON_NUMBERS)
                .unwrap_or(defaults.start_on_numbers),
            enable_sound: store.get_bool(PREF_ENABLE_SOUND).unwrap_or(defaults.enable_sound),
            enable_vibration: store
                .get_bool(PREF_ENABLE_VIBRATION)
                .unwrap_or(defaults.enable_vibration),
            enable_phonetic: store
                .get_bool(PREF_ENABLE_PHONETIC)
                .unwrap_or(defaults.enable_phonetic),
        };
        debug!("Loaded preferences: {:?}", prefs);
        prefs
    }

    /// Value of a setting by its store key
    pub fn get(&self, key: &str) -> Option<bool> {
        match key {
            PREF_ENABLE_LATIN => Some(self.enable_latin),
            PREF_START_ON_NUMBERS => Some(self.start_on_numbers),
            PREF_ENABLE_SOUND => Some(self.enable_sound),
            PREF_ENABLE_VIBRATION => Some(self.enable_vibration),
            PREF_ENABLE_PHONETIC => Some(self.enable_phonetic),
            _ => None,
        }
    }

    /// Render as a TOML document
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Flat string-keyed boolean settings
pub trait PreferenceStore {
    fn get_bool(&self, key: &str) -> Option<bool>;

    fn put_bool(&mut self, key: &str, value: bool) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, key: &str, value: bool) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    fn put_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a TOML file of `key = bool` lines.
///
/// Every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct TomlStore {
    path: PathBuf,
    values: BTreeMap<String, bool>,
}

impl TomlStore {
    /// Open a preference file; a missing file is an empty store
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            toml::from_str(&contents)?
        } else {
            debug!("No preference file at {}, using defaults", path.display());
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current values to disk
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl PreferenceStore for TomlStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    fn put_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.save()
    }
}
