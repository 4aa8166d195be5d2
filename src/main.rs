use std::path::PathBuf;

use calcterm::calculator::{parse_script, replay, CalculatorState, OperandFormatter};
use calcterm::config::Config;
use calcterm::logging::init_tracing;
use calcterm::ui::display::DisplayLines;
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "calcterm", version, about = "Terminal calculator")]
struct Cli {
    /// Config file (default: ~/.config/calcterm/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run a key script instead of starting the UI, e.g. "12+7="
    #[arg(long, value_name = "KEYS")]
    eval: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        warn!(error = %err, "calcterm exited with error");
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let config_path = cli.config.unwrap_or_else(Config::config_path);
    info!(path = %config_path.display(), "config loaded");

    match cli.eval {
        Some(script) => {
            let intents = parse_script(&script)?;
            let state = replay(CalculatorState::default(), intents);
            let lines = DisplayLines::from_state(&state, &OperandFormatter::from(&config.display));
            if let Some(previous) = lines.previous {
                println!("{}", previous);
            }
            println!("{}", lines.current.unwrap_or_default());
            Ok(())
        }
        None => {
            calcterm::ui::run(&config)?;
            Ok(())
        }
    }
}
