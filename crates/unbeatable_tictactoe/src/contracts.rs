//! Preconditions and invariants for applying moves.
//!
//! Preconditions are checked before every move and turn a bad request into
//! a [`MoveError`]. Invariants describe properties of the state that every
//! accepted move must preserve; they are asserted in debug builds.

use crate::error::MoveError;
use crate::position::Position;
use crate::types::{Board, GameState, GameStatus, Mark, Seat};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: A game must be running.
pub struct GameInPlay;

impl GameInPlay {
    /// Rejects moves before the first reset and after a win or tie.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        match state.status() {
            GameStatus::InProgress => Ok(()),
            GameStatus::NotStarted => Err(MoveError::GameNotStarted),
            GameStatus::Won(_) | GameStatus::Tied => Err(MoveError::GameAlreadyOver),
        }
    }
}

/// Precondition: It must be the seat's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a mover that does not match the derived turn.
    pub fn check(state: &GameState, seat: Seat) -> Result<(), MoveError> {
        if seat != state.current_turn() {
            Err(MoveError::WrongTurn(seat))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects an occupied square.
    pub fn check(state: &GameState, position: Position) -> Result<(), MoveError> {
        if !state.board().is_empty(position) {
            Err(MoveError::SquareOccupied(position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the game is running, it is the seat's turn,
/// and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, seat: Seat, position: Position) -> Result<(), MoveError> {
        GameInPlay::check(state)?;
        PlayersTurn::check(state, seat)?;
        SquareIsEmpty::check(state, position)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Invariants
// ─────────────────────────────────────────────────────────────

/// Invariant: Mark counts differ by at most one.
pub struct MarksAlternate;

impl MarksAlternate {
    /// Checks the alternation invariant on a board.
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);

        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Mark alternation violated");
        }
        valid
    }
}

/// Invariant: Each seat's move count equals the number of its marks on
/// the board.
pub struct CountsMatchBoard;

impl CountsMatchBoard {
    /// Checks the move counts against the board for the given mark
    /// assignment.
    pub fn holds(state: &GameState, human_mark: Mark) -> bool {
        let counts = state.move_count();
        let human_marks = state.board().count(human_mark);
        let computer_marks = state.board().count(human_mark.opponent());

        let valid = usize::from(counts.get(Seat::Human)) == human_marks
            && usize::from(counts.get(Seat::Computer)) == computer_marks;
        if !valid {
            warn!(?counts, human_marks, computer_marks, "Move counts disagree with board");
        }
        valid
    }
}

/// Asserts that all game invariants hold (panic on violation in debug builds).
pub fn assert_invariants(state: &GameState, human_mark: Mark) {
    debug_assert!(
        MarksAlternate::holds(state.board()),
        "Mark alternation violated"
    );
    debug_assert!(
        CountsMatchBoard::holds(state, human_mark),
        "Move counts disagree with board"
    );
}
