//! Core domain types for tic-tac-toe.

use crate::position::Position;
use crate::turn::whose_turn;
use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = 9;

/// Side length of the board.
pub const BOARD_SIDE: usize = 3;

/// A mark that can be placed on the board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Cross.
    #[display("X")]
    #[serde(alias = "x")]
    X,
    /// Nought.
    #[display("O")]
    #[serde(alias = "o")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// Which participant occupies a seat at the table.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    /// The human-controlled participant.
    #[display("human")]
    Human,
    /// The automated participant.
    #[display("computer")]
    Computer,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }
}

/// A participant: a seat with a display name and an assigned mark.
///
/// Players are fixed for the lifetime of an engine; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Which seat this player occupies.
    seat: Seat,
    /// Display name.
    name: String,
    /// Mark this player places.
    mark: Mark,
}

impl Player {
    /// One-line description, e.g. `"Human is playing O."`.
    pub fn info(&self) -> String {
        format!("{} is playing {}.", self.name, self.mark)
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`: simulating a move produces a new board and leaves
/// the source board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SQUARES],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SQUARES],
        }
    }

    /// Builds a board from three rows of squares.
    pub fn from_rows(rows: [[Square; BOARD_SIDE]; BOARD_SIDE]) -> Self {
        let mut board = Self::new();
        for pos in Position::ALL {
            board.set(pos, rows[pos.row()][pos.col()]);
        }
        board
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with one square replaced.
    #[must_use]
    pub fn with(mut self, pos: Position, square: Square) -> Self {
        self.set(pos, square);
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; BOARD_SQUARES] {
        &self.squares
    }

    /// Iterates over the empty squares in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Checks whether at least one square is still empty.
    pub fn has_empty(&self) -> bool {
        self.squares.contains(&Square::Empty)
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their keypad number (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let symbol = match self.get(pos) {
                Square::Empty => (pos.to_index() + 1).to_string(),
                Square::Occupied(mark) => mark.to_string(),
            };
            result.push_str(&symbol);
            if pos.col() < BOARD_SIDE - 1 {
                result.push('|');
            } else if pos.row() < BOARD_SIDE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// A character that is neither a mark nor an empty marker.
    #[display("Unexpected board character {:?}", _0)]
    UnexpectedChar(char),
    /// Wrong number of squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine squares in row-major order.
    ///
    /// `X`/`O` are marks, `.`, `_` and `-` are empty. Whitespace and `/`
    /// are ignored, so `"XX./OO./..."` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(BOARD_SQUARES);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let square = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '_' | '-' => Square::Empty,
                other => return Err(BoardParseError::UnexpectedChar(other)),
            };
            squares.push(square);
        }
        let squares: [Square; BOARD_SQUARES] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}

/// Number of moves each seat has made in the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveCount {
    human: u8,
    computer: u8,
}

impl MoveCount {
    /// Creates a move count from explicit values.
    pub fn new(human: u8, computer: u8) -> Self {
        Self { human, computer }
    }

    /// Returns the number of moves made by `seat`.
    pub fn get(&self, seat: Seat) -> u8 {
        match seat {
            Seat::Human => self.human,
            Seat::Computer => self.computer,
        }
    }

    /// Total moves made by both seats.
    pub fn total(&self) -> u8 {
        self.human + self.computer
    }

    pub(crate) fn increment(&mut self, seat: Seat) {
        match seat {
            Seat::Human => self.human += 1,
            Seat::Computer => self.computer += 1,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No game has been started yet.
    NotStarted,
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win for the given seat.
    Won(Seat),
    /// Game ended with a full board and no winner.
    Tied,
}

impl GameStatus {
    /// Returns true once the game has been won or tied.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Tied)
    }
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Moves made so far by each seat.
    move_count: MoveCount,
    /// The seat that moved first.
    starting: Seat,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// State before the first game has been started.
    pub fn not_started() -> Self {
        Self {
            board: Board::new(),
            move_count: MoveCount::default(),
            starting: Seat::Human,
            status: GameStatus::NotStarted,
        }
    }

    /// Fresh state for a game that `starting` opens.
    pub fn new(starting: Seat) -> Self {
        Self {
            status: GameStatus::InProgress,
            starting,
            ..Self::not_started()
        }
    }

    /// The seat expected to move next, derived from the move counts.
    pub fn current_turn(&self) -> Seat {
        whose_turn(self.move_count, self.starting)
    }

    /// Returns true once the game has been won or tied.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Places `mark` for `seat` (unchecked - use the engine for validation).
    pub(crate) fn place(&mut self, seat: Seat, pos: Position, mark: Mark) {
        self.board.set(pos, Square::Occupied(mark));
        self.move_count.increment(seat);
    }

    /// Sets the game status.
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::not_started()
    }
}
