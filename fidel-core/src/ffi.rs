//! Foreign Function Interface for the Fidel keyboard core
//!
//! C-compatible API for platform hosts (Android JNI shims, desktop
//! front-ends). The host owns the real text field and vibrator: each call
//! reports what to do through [`FidelKeyOutput`], and the host applies it.

use crate::engine::{HostAction, HostIo, KeyCase, KeyboardSession};
use crate::host::{
    EditorAction, FieldInfo, MemorySink, MemoryStore, PreferenceStore, Preferences, PulseRecorder,
    PREF_ENABLE_LATIN,
};
use crate::types::KeyCode;
use log::{debug, warn};
use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::ptr;
use std::sync::Mutex;

/// Opaque handle to a keyboard session
pub struct SessionHandle {
    inner: Mutex<SessionInner>,
}

struct SessionInner {
    session: KeyboardSession,
    store: MemoryStore,
    focused: bool,
}

/// Result codes for FFI functions
#[repr(C)]
#[derive(Debug, PartialEq)]
pub enum FidelResult {
    Success = 0,
    ErrorInvalidHandle = -1,
    ErrorInvalidParameter = -2,
    ErrorEngineFailure = -3,
}

/// Preference snapshot passed by the host (0 = false, anything else = true)
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FidelPreferences {
    pub enable_latin: c_int,
    pub start_on_numbers: c_int,
    pub enable_sound: c_int,
    pub enable_vibration: c_int,
    pub enable_phonetic: c_int,
}

impl From<FidelPreferences> for Preferences {
    fn from(p: FidelPreferences) -> Self {
        Preferences {
            enable_latin: p.enable_latin != 0,
            start_on_numbers: p.start_on_numbers != 0,
            enable_sound: p.enable_sound != 0,
            enable_vibration: p.enable_vibration != 0,
            enable_phonetic: p.enable_phonetic != 0,
        }
    }
}

/// Output from processing a key code
#[repr(C)]
pub struct FidelKeyOutput {
    /// 0 when the key was dropped
    pub handled: c_int,
    /// Text to commit (UTF-8, null-terminated), null when none.
    /// Commits containing NUL cannot be represented and are reported as dropped.
    pub text: *mut c_char,
    /// 1 when the host should vibrate for `HAPTIC_PULSE`
    pub haptic: c_int,
    /// Characters to delete before the cursor
    pub delete_count: c_int,
    /// Editor action to perform, -1 when none
    pub editor_action: c_int,
    /// 1 when the host should send enter press + release
    pub line_break: c_int,
    /// 1 when the view should switch to `layout`
    pub layout_changed: c_int,
    /// Layout id: 0=NativeLetters, 1=LatinLetters, 2=NativeSymbolsOrNumbers, 3=LatinSymbols
    pub layout: c_int,
    /// 1 for upper-case key glyphs
    pub upper_case: c_int,
    /// Value of enable-latin to persist after a language switch, -1 otherwise
    pub persist_latin: c_int,
}

impl FidelKeyOutput {
    fn reset(&mut self) {
        self.handled = 0;
        self.text = ptr::null_mut();
        self.haptic = 0;
        self.delete_count = 0;
        self.editor_action = -1;
        self.line_break = 0;
        self.layout_changed = 0;
        self.layout = 0;
        self.upper_case = 0;
        self.persist_latin = -1;
    }
}

/// Creates a new session from a preference snapshot
#[no_mangle]
pub extern "C" fn fidel_session_new(prefs: FidelPreferences) -> *mut SessionHandle {
    let prefs = Preferences::from(prefs);
    let handle = Box::new(SessionHandle {
        inner: Mutex::new(SessionInner {
            session: KeyboardSession::new(prefs),
            store: MemoryStore::new().with(PREF_ENABLE_LATIN, prefs.enable_latin),
            focused: false,
        }),
    });
    Box::into_raw(handle)
}

/// Frees a session
///
/// `handle` must come from `fidel_session_new` and must not be used again afterwards.
#[no_mangle]
pub extern "C" fn fidel_session_free(handle: *mut SessionHandle) {
    if !handle.is_null() {
        // Safety: the handle was created by Box::into_raw in fidel_session_new
        unsafe {
            let _ = Box::from_raw(handle);
        }
    }
}

/// A field gained focus. `ime_options` carries the field's editor action in its low byte.
///
/// `handle` must come from `fidel_session_new` and not have been freed.
#[no_mangle]
pub extern "C" fn fidel_session_start_input(
    handle: *mut SessionHandle,
    prefs: FidelPreferences,
    ime_options: c_int,
) -> FidelResult {
    if handle.is_null() {
        return FidelResult::ErrorInvalidHandle;
    }

    // Safety: non-null handle from fidel_session_new
    let handle = unsafe { &*handle };
    match handle.inner.lock() {
        Ok(mut inner) => {
            let prefs = Preferences::from(prefs);
            let field = FieldInfo::new(EditorAction::from_options(ime_options));
            inner.session.start_input(prefs, field);
            if let Err(e) = inner.store.put_bool(PREF_ENABLE_LATIN, prefs.enable_latin) {
                warn!("Failed to sync {}: {}", PREF_ENABLE_LATIN, e);
            }
            inner.focused = true;
            FidelResult::Success
        }
        Err(_) => FidelResult::ErrorEngineFailure,
    }
}

/// The focused field went away; text keys are dropped until the next start
///
/// `handle` must come from `fidel_session_new` and not have been freed.
#[no_mangle]
pub extern "C" fn fidel_session_finish_input(handle: *mut SessionHandle) -> FidelResult {
    if handle.is_null() {
        return FidelResult::ErrorInvalidHandle;
    }

    // Safety: non-null handle from fidel_session_new
    let handle = unsafe { &*handle };
    match handle.inner.lock() {
        Ok(mut inner) => {
            inner.focused = false;
            FidelResult::Success
        }
        Err(_) => FidelResult::ErrorEngineFailure,
    }
}

/// Processes a raw key code
///
/// `handle` must come from `fidel_session_new` and not have been freed; `output`
/// must point to writable memory. Returned text is freed with `fidel_free_string`.
#[no_mangle]
pub extern "C" fn fidel_session_process_key(
    handle: *mut SessionHandle,
    key_code: c_int,
    output: *mut FidelKeyOutput,
) -> FidelResult {
    if handle.is_null() {
        return FidelResult::ErrorInvalidHandle;
    }
    if output.is_null() {
        return FidelResult::ErrorInvalidParameter;
    }

    // Safety: non-null handle from fidel_session_new, output checked above
    let handle = unsafe { &*handle };
    let output = unsafe { &mut *output };
    output.reset();

    let mut inner = match handle.inner.lock() {
        Ok(inner) => inner,
        Err(_) => return FidelResult::ErrorEngineFailure,
    };
    let SessionInner { session, store, focused } = &mut *inner;

    let mut sink = MemorySink::new();
    let mut haptics = PulseRecorder::new();
    let mut io = HostIo::new(&mut *store).with_haptics(&mut haptics);
    if *focused {
        io = io.with_sink(&mut sink);
    }

    let outcome = session.process_code(key_code, &mut io);

    if let Some(commit) = &outcome.commit {
        match CString::new(commit.text.clone()) {
            Ok(c_string) => output.text = c_string.into_raw(),
            Err(_) => {
                debug!("Dropping commit with NUL for key code {}", key_code);
                return FidelResult::Success;
            }
        }
    }
    output.handled = outcome.handled as c_int;
    output.haptic = outcome.pulsed as c_int;
    match outcome.action {
        Some(HostAction::DeleteBefore(count)) => output.delete_count = count as c_int,
        Some(HostAction::Editor(action)) => output.editor_action = action.raw(),
        Some(HostAction::LineBreak) => output.line_break = 1,
        None => {}
    }
    if let Some(display) = outcome.display {
        output.layout_changed = 1;
        output.layout = display.layout.index() as c_int;
        output.upper_case = (display.case == KeyCase::Upper) as c_int;
    }

    if KeyCode::from_raw(key_code) == Some(KeyCode::LanguageSwitch) {
        output.persist_latin = session.state().script.is_latin() as c_int;
    }

    FidelResult::Success
}

/// Gets the layout the view should currently show, -1 on error
///
/// `handle` must come from `fidel_session_new` and not have been freed.
#[no_mangle]
pub extern "C" fn fidel_session_current_layout(handle: *mut SessionHandle) -> c_int {
    if handle.is_null() {
        return -1;
    }

    // Safety: non-null handle from fidel_session_new
    let handle = unsafe { &*handle };
    match handle.inner.lock() {
        Ok(inner) => inner.session.input_view().layout.layout.index() as c_int,
        Err(_) => -1,
    }
}

/// Frees a string allocated by the engine
///
/// `s` must be a `text` pointer from `FidelKeyOutput`, freed at most once.
#[no_mangle]
pub extern "C" fn fidel_free_string(s: *mut c_char) {
    if !s.is_null() {
        // Safety: the string was created by CString::into_raw
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

/// Get library version
#[no_mangle]
pub extern "C" fn fidel_get_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
