pub mod error;
pub mod lexer;
pub mod script;
pub mod simulator;

pub use error::{Result, ScriptError};
pub use script::{parse_script, ScriptKey};
pub use simulator::{apply_assignments, parse_assignment, SimOptions, Simulator, Step};

use fidel_core::engine::TransliterationTable;
use fidel_core::PreferenceStore;

/// Parse and play a key script, returning the steps and final field text
pub fn run_script<S: PreferenceStore>(
    input: &str,
    store: S,
    options: SimOptions,
) -> Result<(Vec<Step>, String)> {
    let keys = parse_script(input)?;
    let mut sim = Simulator::new(store, options);
    let steps = sim.play(&keys);
    Ok((steps, sim.text().to_string()))
}

/// The phonetic table as `latin -> fidel` lines
pub fn render_table() -> String {
    TransliterationTable::new()
        .entries()
        .map(|(latin, fidel)| format!("{} -> {}\n", latin, fidel))
        .collect()
}
