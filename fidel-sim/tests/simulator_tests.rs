use fidel_core::host::{MemoryStore, PREF_ENABLE_LATIN, PREF_ENABLE_PHONETIC, PREF_START_ON_NUMBERS};
use fidel_core::{EditorAction, KeyCase, LayoutId, PreferenceStore};
use fidel_sim::{parse_script, render_table, run_script, SimOptions, Simulator};
use pretty_assertions::assert_eq;

fn latin_store(phonetic: bool) -> MemoryStore {
    MemoryStore::new()
        .with(PREF_ENABLE_LATIN, true)
        .with(PREF_ENABLE_PHONETIC, phonetic)
}

#[test]
fn test_plain_latin_typing_with_shift() {
    let (_, text) = run_script("h <SHIFT> i <SHIFT> !", latin_store(false), SimOptions::default())
        .unwrap();
    assert_eq!(text, "hI!");
}

#[test]
fn test_phonetic_typing() {
    let (steps, text) =
        run_script("s e l a m", latin_store(true), SimOptions::default()).unwrap();
    assert_eq!(text, "ሰeለaመ");
    assert!(steps.iter().all(|step| step.outcome.pulsed));
}

#[test]
fn test_language_switch_is_written_back() {
    let keys = parse_script("<LANG>").unwrap();
    let mut sim = Simulator::new(MemoryStore::new(), SimOptions::default());
    assert_eq!(sim.view().layout, LayoutId::NativeLetters);

    let steps = sim.play(&keys);
    assert_eq!(steps[0].view.layout, LayoutId::LatinLetters);
    assert_eq!(sim.store().get_bool(PREF_ENABLE_LATIN), Some(true));
}

#[test]
fn test_refocus_rereads_store() {
    let keys = parse_script("<SHIFT> <PAGE> <FOCUS> a").unwrap();
    let mut sim = Simulator::new(latin_store(false), SimOptions::default());

    let steps = sim.play(&keys);
    assert_eq!(steps[1].view.layout, LayoutId::LatinSymbols);
    // Page re-seeded, shift kept
    assert_eq!(steps[2].view.layout, LayoutId::LatinLetters);
    assert_eq!(steps[2].view.case, KeyCase::Upper);
    assert_eq!(sim.text(), "A");
}

#[test]
fn test_start_on_numbers() {
    let store = MemoryStore::new().with(PREF_START_ON_NUMBERS, true);
    let sim = Simulator::new(store, SimOptions::default());
    assert_eq!(sim.view().layout, LayoutId::NativeSymbolsOrNumbers);
    assert_eq!(sim.describe(sim.view()), "geez-numerals");
}

#[test]
fn test_blurred_field_drops_text_but_not_layout_keys() {
    let keys = parse_script("a <BLUR> b <LANG> <FOCUS> c").unwrap();
    let mut sim = Simulator::new(MemoryStore::new(), SimOptions::default());

    let steps = sim.play(&keys);
    assert!(!steps[2].outcome.handled);
    assert!(steps[3].outcome.handled);
    assert_eq!(sim.text(), "ac");
    assert_eq!(sim.store().get_bool(PREF_ENABLE_LATIN), Some(true));
}

#[test]
fn test_delete_and_submit() {
    let options = SimOptions {
        action: EditorAction::Send,
        initial_text: "abc".to_string(),
        ..SimOptions::default()
    };
    let mut sim = Simulator::new(MemoryStore::new(), options);
    sim.play(&parse_script("<DEL> <ENTER>").unwrap());

    assert_eq!(sim.text(), "ab");
    assert_eq!(sim.sink().actions, vec![EditorAction::Send]);
}

#[test]
fn test_enter_without_action_breaks_line() {
    let (_, text) = run_script("a <ENTER> b", MemoryStore::new(), SimOptions::default()).unwrap();
    assert_eq!(text, "a\nb");
}

#[test]
fn test_device_without_vibrator() {
    let options = SimOptions {
        vibrator: false,
        ..SimOptions::default()
    };
    let mut sim = Simulator::new(MemoryStore::new(), options);
    let steps = sim.play(&parse_script("ሀ").unwrap());
    assert!(!steps[0].outcome.pulsed);
    assert_eq!(sim.pulses(), 0);
}

#[test]
fn test_raw_codes_and_text_keys() {
    let (steps, text) =
        run_script("<109> \"www.\" <-1000>", latin_store(false), SimOptions::default()).unwrap();
    assert_eq!(text, "mwww.");
    assert!(!steps[1].outcome.pulsed);
    assert!(!steps[2].outcome.handled);
}

#[test]
fn test_step_transcript() {
    let (steps, _) = run_script("<LANG> <SHIFT> <DEL>", MemoryStore::new(), SimOptions::default())
        .unwrap();
    assert_eq!(steps[0].to_string(), "<LanguageSwitch> -> LatinLetters");
    assert_eq!(steps[1].to_string(), "<ShiftToggle> -> LatinLetters (upper)");
    assert_eq!(steps[2].to_string(), "<Delete>     delete 1");
}

#[test]
fn test_table_listing() {
    let table = render_table();
    assert!(table.contains("m -> መ\n"));
    assert_eq!(table.lines().count(), 16);
}
