//! Unbeatable tic-tac-toe - a game engine with an exhaustive minimax opponent
//!
//! # Architecture
//!
//! - **Engine**: authoritative game state, turn arbitration and terminal detection
//! - **Search**: full-depth minimax that picks the computer's moves
//! - **Rules**: pure win and draw checks shared by both
//! - **Events**: notifications for whatever front end drives the engine
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{FirstPlayer, GameConfig, GameEngine, Position};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default().with_first_player(FirstPlayer::Human);
//! let mut engine = GameEngine::new(&config)?;
//! engine.reset_game()?;
//!
//! // The computer answers immediately.
//! assert!(engine.play_human_move(Position::Center)?);
//! assert_eq!(engine.move_count().total(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod contracts;
mod engine;
mod error;
mod events;
mod position;
mod rules;
mod search;
mod turn;
mod types;

// Crate-level exports - Engine
pub use engine::GameEngine;

// Crate-level exports - Configuration
pub use config::{ConfigError, FirstPlayer, GameConfig};

// Crate-level exports - Errors
pub use error::{MoveError, SearchError};

// Crate-level exports - Events
pub use events::{GameEvent, Outcome};

// Crate-level exports - Search
pub use search::{DRAW_SCORE, LOSS_SCORE, SearchEngine, WIN_SCORE};

// Crate-level exports - Rules and contracts
pub use contracts::{
    CountsMatchBoard, GameInPlay, LegalMove, MarksAlternate, PlayersTurn, SquareIsEmpty,
    assert_invariants,
};
pub use rules::{LINES, check_winner, has_line, is_draw, is_full};
pub use turn::whose_turn;

// Crate-level exports - Game types
pub use position::{Position, PositionError};
pub use types::{
    BOARD_SIDE, BOARD_SQUARES, Board, BoardParseError, GameState, GameStatus, Mark, MoveCount,
    Player, Seat, Square,
};
