//! Notifications emitted by the game engine.
//!
//! The engine buffers events in the order they happen. A presentation layer
//! drains them after each call and renders whatever it needs.

use crate::position::Position;
use crate::types::{Mark, Seat};
use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The seat completed a line.
    Won(Seat),
    /// The board filled with no winner.
    Tied,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Won(seat) => Some(*seat),
            Outcome::Tied => None,
        }
    }

    /// Returns true if the game was tied.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tied)
    }
}

/// Something the presentation layer may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game was started.
    GameStarted {
        /// The seat that moves first.
        starting: Seat,
    },
    /// The given seat is expected to move next.
    TurnStarted(Seat),
    /// A move was accepted and written to the board.
    MoveApplied {
        /// Who moved.
        seat: Seat,
        /// Where.
        position: Position,
        /// The mark now on that square.
        mark: Mark,
    },
    /// The game reached a terminal state.
    GameEnded(Outcome),
}
