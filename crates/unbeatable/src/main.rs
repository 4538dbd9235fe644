//! Unbeatable - terminal tic-tac-toe against a computer that never loses.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use console::Console;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::{GameConfig, GameEngine};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn,unbeatable=info,unbeatable_tictactoe=info";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let mut engine = GameEngine::new(&config).context("Invalid game configuration")?;

    let stdin = std::io::stdin();
    Console::new(stdin.lock(), std::io::stdout()).run(&mut engine)
}

/// Logs go to stderr so the board on stdout stays readable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { DEFAULT_FILTER };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the config file if present, then applies command-line overrides.
#[instrument(skip(cli), fields(path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = if cli.config.exists() {
        GameConfig::from_file(&cli.config)
            .with_context(|| format!("Failed to load {}", cli.config.display()))?
    } else {
        debug!("Config file not found, using defaults");
        GameConfig::default()
    };

    if let Some(first) = cli.first {
        config = config.with_first_player(first.into());
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(mark) = cli.mark {
        config = config.with_human_mark(mark.into());
    }

    config.validate().context("Invalid game configuration")?;
    info!(first_player = config.first_player().label(), "Configuration ready");
    Ok(config)
}
