//! Board coordinates for tic-tac-toe moves.

use crate::error::MoveError;
use crate::types::{BOARD_SIDE, Board};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Variants are declared in row-major order, so iterating [`Position::ALL`]
/// (or the `strum` iterator) walks row 0 left to right, then row 1, then row 2.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (0,0)
    TopLeft,
    /// Top-center (0,1)
    TopCenter,
    /// Top-right (0,2)
    TopRight,
    /// Middle-left (1,0)
    MiddleLeft,
    /// Center (1,1)
    Center,
    /// Middle-right (1,2)
    MiddleRight,
    /// Bottom-left (2,0)
    BottomLeft,
    /// Bottom-center (2,1)
    BottomCenter,
    /// Bottom-right (2,2)
    BottomRight,
}

/// Error parsing a position from user input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PositionError {
    /// Coordinates were given but at least one is outside 0-2.
    #[display("Coordinates ({}, {}) are off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// Input matched none of the accepted forms.
    #[display("Unrecognized position {:?} (try \"row,col\", 1-9, or a label)", _0)]
    Unrecognized(String),
}

impl std::error::Error for PositionError {}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / BOARD_SIDE
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % BOARD_SIDE
    }

    /// `(row, col)` pair.
    pub fn coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Creates a position from 0-indexed coordinates.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIDE && col < BOARD_SIDE {
            Self::from_index(row * BOARD_SIDE + col)
        } else {
            None
        }
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        board.empty_positions().collect()
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = MoveError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parses `"row,col"` (0-indexed), a keypad digit `1`-`9`, or a label.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some((row, col)) = trimmed.split_once(',') {
            let parsed = (row.trim().parse::<usize>(), col.trim().parse::<usize>());
            if let (Ok(row), Ok(col)) = parsed {
                return Self::from_coords(row, col)
                    .ok_or(PositionError::OutOfBounds { row, col });
            }
            return Err(PositionError::Unrecognized(trimmed.to_string()));
        }

        if let Ok(num) = trimmed.parse::<usize>() {
            return num
                .checked_sub(1)
                .and_then(Self::from_index)
                .ok_or_else(|| PositionError::Unrecognized(trimmed.to_string()));
        }

        let lower = trimmed.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|pos| pos.label().to_lowercase() == lower)
            .ok_or_else(|| PositionError::Unrecognized(trimmed.to_string()))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
