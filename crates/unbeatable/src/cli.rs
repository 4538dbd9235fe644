//! Command-line interface for unbeatable.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use unbeatable_tictactoe::{FirstPlayer, Mark};

/// Unbeatable - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config (defaults are used if the file is absent)
    #[arg(short, long, default_value = "unbeatable.toml")]
    pub config: PathBuf,

    /// Who moves first in each game
    #[arg(long, value_enum)]
    pub first: Option<FirstArg>,

    /// Seed for the starting-player coin flip
    #[arg(long)]
    pub seed: Option<u64>,

    /// Your mark; the computer plays the other one
    #[arg(long, value_enum)]
    pub mark: Option<MarkArg>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    pub verbose: bool,
}

/// Starting player as given on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstArg {
    /// You always start
    Human,
    /// The computer always starts
    Computer,
    /// Flip a coin for every game
    Random,
}

impl From<FirstArg> for FirstPlayer {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Human => FirstPlayer::Human,
            FirstArg::Computer => FirstPlayer::Computer,
            FirstArg::Random => FirstPlayer::Random,
        }
    }
}

/// Mark as given on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// Cross
    X,
    /// Nought
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}
