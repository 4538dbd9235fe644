//! Authoritative game engine: turn arbitration, move validation and
//! terminal-state detection.
//!
//! The engine owns the only mutable copy of the game state. The search
//! engine only ever sees the board by reference and simulates on its own
//! copies.

use crate::config::{ConfigError, FirstPlayer, GameConfig};
use crate::contracts::{LegalMove, assert_invariants};
use crate::error::{MoveError, SearchError};
use crate::events::{GameEvent, Outcome};
use crate::position::Position;
use crate::rules::{has_line, is_full};
use crate::search::SearchEngine;
use crate::types::{Board, GameState, GameStatus, MoveCount, Player, Seat};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game between a human and an unbeatable computer.
#[derive(Debug, Clone)]
pub struct GameEngine {
    human: Player,
    computer: Player,
    state: GameState,
    search: SearchEngine,
    first_player: FirstPlayer,
    rng: StdRng,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Creates an engine from a validated configuration.
    ///
    /// No game is running until [`GameEngine::reset_game`] is called.
    #[instrument(skip(config), fields(first_player = config.first_player().label()))]
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        let computer = config.computer_player();
        let search = SearchEngine::new(*computer.mark());

        info!(
            human = %config.human_player().info(),
            computer = %computer.info(),
            "Game engine created"
        );

        Ok(Self {
            human: config.human_player(),
            computer,
            state: GameState::not_started(),
            search,
            first_player: *config.first_player(),
            rng,
            events: Vec::new(),
        })
    }

    /// The human participant.
    pub fn human(&self) -> &Player {
        &self.human
    }

    /// The automated participant.
    pub fn computer(&self) -> &Player {
        &self.computer
    }

    /// The participant sitting in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Human => &self.human,
            Seat::Computer => &self.computer,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Moves made so far by each seat.
    pub fn move_count(&self) -> MoveCount {
        *self.state.move_count()
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        *self.state.status()
    }

    /// Returns true once the game has been won or tied.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns true if the human opened the current game.
    pub fn does_human_start(&self) -> bool {
        *self.state.starting() == Seat::Human
    }

    /// Takes all events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Starts a new game.
    ///
    /// Clears the board and both move counts, then picks the starting seat.
    /// If the computer starts, its first move is played before returning.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> Result<(), SearchError> {
        let starting = self.first_player.pick(&mut self.rng);
        self.state = GameState::new(starting);
        info!(%starting, "New game started");

        self.events.push(GameEvent::GameStarted { starting });
        self.events.push(GameEvent::TurnStarted(starting));

        if starting == Seat::Computer {
            self.request_automated_move()?;
        }
        Ok(())
    }

    /// The participant expected to move next.
    pub fn current_turn(&self) -> &Player {
        self.player(self.state.current_turn())
    }

    /// Checks whether `seat` may play `position` right now, without
    /// touching any state.
    pub fn validate_move(&self, seat: Seat, position: Position) -> Result<(), MoveError> {
        LegalMove::check(&self.state, seat, position)
    }

    /// Applies a move, returning whether it was accepted.
    pub fn apply_move(&mut self, seat: Seat, position: Position) -> bool {
        self.try_apply_move(seat, position).is_ok()
    }

    /// Applies a move given as raw `(row, col)` coordinates.
    pub fn try_apply_move_at(&mut self, seat: Seat, row: usize, col: usize) -> Result<(), MoveError> {
        match Position::try_from((row, col)) {
            Ok(position) => self.try_apply_move(seat, position),
            Err(err) => Err(self.reject(seat, err)),
        }
    }

    /// Applies a move, returning the rejection reason on failure.
    ///
    /// On success the mark is written, the seat's move count goes up, and
    /// the win check runs followed by the tie check. A rejected move leaves
    /// the state unchanged.
    #[instrument(skip(self))]
    pub fn try_apply_move(&mut self, seat: Seat, position: Position) -> Result<(), MoveError> {
        if let Err(err) = self.validate_move(seat, position) {
            return Err(self.reject(seat, err));
        }

        let mark = *self.player(seat).mark();
        self.state.place(seat, position, mark);
        debug!(%seat, %position, %mark, "Move applied");
        self.events.push(GameEvent::MoveApplied {
            seat,
            position,
            mark,
        });

        if !self.check_victory(seat) {
            self.check_tie();
        }
        assert_invariants(&self.state, *self.human.mark());

        if !self.is_terminal() {
            self.events
                .push(GameEvent::TurnStarted(self.state.current_turn()));
        }
        Ok(())
    }

    /// Checks whether `seat` holds a full row, column or diagonal.
    ///
    /// A win ends a game in progress. The check never clears or replaces
    /// a result that is already recorded.
    #[instrument(skip(self))]
    pub fn check_victory(&mut self, seat: Seat) -> bool {
        let won = has_line(self.state.board(), *self.player(seat).mark());
        if won && *self.state.status() == GameStatus::InProgress {
            self.finish(Outcome::Won(seat));
        }
        won
    }

    /// Asks the search engine for the computer's move and plays it.
    ///
    /// Returns `Ok(None)` without searching when the game is not in
    /// progress, the board is full, or it is not the computer's turn.
    #[instrument(skip(self))]
    pub fn request_automated_move(&mut self) -> Result<Option<Position>, SearchError> {
        if *self.state.status() != GameStatus::InProgress || !self.board().has_empty() {
            debug!(status = ?self.state.status(), "No automated move to make");
            return Ok(None);
        }
        if self.state.current_turn() != Seat::Computer {
            debug!("Not the computer's turn");
            return Ok(None);
        }

        let position = self.search.find_best_move(self.state.board())?;
        Ok(self.apply_move(Seat::Computer, position).then_some(position))
    }

    /// Plays the human's move and, if it was accepted, the computer's reply.
    ///
    /// Returns whether the human's move was accepted.
    #[instrument(skip(self))]
    pub fn play_human_move(&mut self, position: Position) -> Result<bool, SearchError> {
        if !self.apply_move(Seat::Human, position) {
            return Ok(false);
        }
        self.request_automated_move()?;
        Ok(true)
    }

    /// Marks a full board without a winner as tied.
    fn check_tie(&mut self) {
        if *self.state.status() == GameStatus::InProgress && is_full(self.state.board()) {
            self.finish(Outcome::Tied);
        }
    }

    fn reject(&mut self, seat: Seat, err: MoveError) -> MoveError {
        warn!(%seat, error = %err, "Move rejected");
        self.check_tie();
        err
    }

    fn finish(&mut self, outcome: Outcome) {
        let status = match outcome {
            Outcome::Won(seat) => GameStatus::Won(seat),
            Outcome::Tied => GameStatus::Tied,
        };
        self.state.set_status(status);
        info!(?outcome, "Game over");
        self.events.push(GameEvent::GameEnded(outcome));
    }
}
