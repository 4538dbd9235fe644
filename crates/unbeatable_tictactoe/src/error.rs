//! Error types for move validation and search.

use crate::position::Position;
use crate::types::Seat;
use derive_more::Display;

/// Reason a move request was rejected.
///
/// Every variant is recoverable: the engine state is unchanged and the
/// caller may simply ignore the rejection.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The coordinates do not name a square on the board.
    #[display("Coordinates ({}, {}) are off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// It's not this seat's turn.
    #[display("It's not the {}'s turn", _0)]
    WrongTurn(Seat),

    /// The game has already been won or tied.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// No game has been started yet.
    #[display("Game has not started")]
    GameNotStarted,
}

impl MoveError {
    /// Returns true for rejections caused by the square itself
    /// (occupied or off the board) rather than by game flow.
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            MoveError::SquareOccupied(_) | MoveError::OutOfBounds { .. }
        )
    }
}

impl std::error::Error for MoveError {}

/// Contract violation raised by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchError {
    /// A best move was requested for a board with no empty squares.
    #[display("Cannot search for a move on a full board")]
    FullBoard,
}

impl std::error::Error for SearchError {}
