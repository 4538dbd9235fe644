//! Exhaustive minimax search for tic-tac-toe.
//!
//! The search is full-width and full-depth with no pruning; a 3x3 board is
//! small enough that a complete search from the empty board finishes at
//! interactive speed.
//!
//! Scores are depth-independent: a win found deep in the tree scores the
//! same as an immediate one. Among equally scored moves the first empty
//! square in row-major order is chosen.
//!
//! Boards are passed by value. Each trial move produces a fresh copy, so no
//! branch of the search can observe another branch's moves and the caller's
//! board is never touched.

use crate::error::SearchError;
use crate::position::Position;
use crate::rules::check_winner;
use crate::types::{Board, Mark, Square};
use tracing::{debug, error, instrument};

/// Score of a board where the maximizing mark has three in a row.
pub const WIN_SCORE: i32 = 10;

/// Score of a board where the opposing mark has three in a row.
pub const LOSS_SCORE: i32 = -10;

/// Score of a board with no completed line.
pub const DRAW_SCORE: i32 = 0;

/// Chooses optimal moves for one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    maximizer: Mark,
}

impl SearchEngine {
    /// Creates a search engine playing for `maximizer`.
    pub fn new(maximizer: Mark) -> Self {
        Self { maximizer }
    }

    /// The mark this engine maximizes for.
    pub fn maximizer(&self) -> Mark {
        self.maximizer
    }

    /// Static evaluation: [`WIN_SCORE`], [`LOSS_SCORE`] or [`DRAW_SCORE`].
    ///
    /// Lines are checked rows first, then columns, then diagonals.
    pub fn evaluate(&self, board: &Board) -> i32 {
        match check_winner(board) {
            Some(mark) if mark == self.maximizer => WIN_SCORE,
            Some(_) => LOSS_SCORE,
            None => DRAW_SCORE,
        }
    }

    /// Minimax value of `board` with `maximizing` telling whose move it is.
    pub fn search(&self, board: Board, maximizing: bool) -> i32 {
        let score = self.evaluate(&board);
        if score != DRAW_SCORE {
            return score;
        }
        if !board.has_empty() {
            return DRAW_SCORE;
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let children = board
            .empty_positions()
            .map(|pos| self.search(board.with(pos, Square::Occupied(mover)), !maximizing));

        let best = if maximizing {
            children.max()
        } else {
            children.min()
        };
        best.unwrap_or(DRAW_SCORE)
    }

    /// Value of placing the maximizing mark at `position`, with the
    /// opponent to reply.
    pub fn score_move(&self, board: &Board, position: Position) -> i32 {
        let trial = board.with(position, Square::Occupied(self.maximizer));
        self.search(trial, false)
    }

    /// Returns the best move for the maximizing mark.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::FullBoard`] when there is no empty square.
    /// Callers are expected to check for an empty square first, so this
    /// signals a bug in the caller.
    #[instrument(skip(self, board), fields(maximizer = %self.maximizer))]
    pub fn find_best_move(&self, board: &Board) -> Result<Position, SearchError> {
        let mut best: Option<(Position, i32)> = None;

        for position in board.empty_positions() {
            let score = self.score_move(board, position);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((position, score));
            }
        }

        match best {
            Some((position, score)) => {
                debug!(%position, score, "Best move found");
                Ok(position)
            }
            None => {
                error!("Search requested on a full board");
                Err(SearchError::FullBoard)
            }
        }
    }
}
