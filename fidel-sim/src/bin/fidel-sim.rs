use std::fs::read_to_string;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};

use fidel_core::host::TomlStore;
use fidel_core::{EditorAction, Preferences};
use fidel_sim::{apply_assignments, parse_script, render_table, SimOptions, Simulator};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fidel Keyboard Simulator", long_about = None)]
struct Args {
    /// Key script, e.g. '<LANG> selam <ENTER>'
    script: Option<String>,

    /// Read the key script from a file
    #[arg(short, long, conflicts_with = "script")]
    file: Option<PathBuf>,

    /// Preference file (defaults to the user config directory)
    #[arg(short, long)]
    prefs: Option<PathBuf>,

    /// Editor action declared by the simulated field
    #[arg(short, long, value_enum, default_value_t = ActionArg::Unspecified)]
    action: ActionArg,

    /// Initial contents of the field
    #[arg(long, default_value = "")]
    text: String,

    /// Store a preference before the session starts (KEY=true|false)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Start without a focused field
    #[arg(long)]
    unfocused: bool,

    /// Simulate a device without a vibration motor
    #[arg(long)]
    no_vibrator: bool,

    /// Print the phonetic transliteration table and exit
    #[arg(long)]
    table: bool,

    /// Print the effective preferences as TOML
    #[arg(long)]
    show_prefs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ActionArg {
    Unspecified,
    None,
    Go,
    Search,
    Send,
    Next,
    Done,
    Previous,
}

impl From<ActionArg> for EditorAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Unspecified => EditorAction::Unspecified,
            ActionArg::None => EditorAction::None,
            ActionArg::Go => EditorAction::Go,
            ActionArg::Search => EditorAction::Search,
            ActionArg::Send => EditorAction::Send,
            ActionArg::Next => EditorAction::Next,
            ActionArg::Done => EditorAction::Done,
            ActionArg::Previous => EditorAction::Previous,
        }
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.table {
        print!("{}", render_table());
        return Ok(());
    }

    let prefs_path = match args.prefs {
        Some(path) => path,
        None => default_prefs_path()?,
    };
    let mut store = TomlStore::open(&prefs_path)
        .with_context(|| format!("Failed to open preferences {}", prefs_path.display()))?;
    apply_assignments(&mut store, &args.set).context("Failed to update preferences")?;

    if args.show_prefs {
        let prefs = Preferences::load(&store);
        print!("{}", prefs.to_toml()?);
    }

    let input = match (&args.script, &args.file) {
        (Some(script), _) => script.clone(),
        (None, Some(file)) => read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?,
        (None, None) if args.show_prefs || !args.set.is_empty() => return Ok(()),
        (None, None) => bail!("No key script given (pass a script or --file)"),
    };
    let keys = parse_script(&input).context("Failed to parse key script")?;

    let options = SimOptions {
        action: args.action.into(),
        initial_text: args.text,
        focused: !args.unfocused,
        vibrator: !args.no_vibrator,
    };
    let mut sim = Simulator::new(store, options);

    for key in &keys {
        let step = sim.press(key);
        if args.verbose {
            println!("{}", step);
        }
    }

    if args.verbose {
        println!("layout: {}", sim.describe(sim.view()));
        println!("pulses: {}", sim.pulses());
    }
    println!("{}", sim.text());

    Ok(())
}

fn default_prefs_path() -> anyhow::Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Failed to get config directory")?;
    Ok(config_dir.join("fidel-keyboard").join("preferences.toml"))
}
