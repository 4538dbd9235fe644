//! Tests for the game engine lifecycle, move arbitration and events.

use unbeatable_tictactoe::{
    Board, FirstPlayer, GameConfig, GameEngine, GameEvent, GameStatus, Mark, MoveError, Outcome,
    Position, Seat, Square,
};

fn engine_with(first: FirstPlayer, human_mark: Mark) -> GameEngine {
    let config = GameConfig::default()
        .with_first_player(first)
        .with_human_mark(human_mark)
        .with_seed(7);
    GameEngine::new(&config).expect("Default config should be valid")
}

/// Started engine where the human (X) moves first and nothing is automated
/// unless requested.
fn human_x_first() -> GameEngine {
    let mut engine = engine_with(FirstPlayer::Human, Mark::X);
    engine.reset_game().expect("Human start never searches");
    engine
}

fn play(engine: &mut GameEngine, moves: &[(Seat, Position)]) {
    for &(seat, pos) in moves {
        assert!(
            engine.apply_move(seat, pos),
            "{seat} should be allowed to play {pos}"
        );
    }
}

#[test]
fn test_reset_clears_board_and_counts() {
    let mut engine = human_x_first();
    play(
        &mut engine,
        &[(Seat::Human, Position::Center), (Seat::Computer, Position::TopLeft)],
    );

    engine.reset_game().unwrap();
    assert_eq!(*engine.board(), Board::new());
    assert_eq!(engine.move_count().total(), 0);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.current_turn().seat(), &Seat::Human);
}

#[test]
fn test_computer_start_plays_first_move_on_reset() {
    // Human plays O by default, so the computer opens with X.
    let mut engine = engine_with(FirstPlayer::Computer, Mark::O);
    engine.reset_game().unwrap();

    assert!(!engine.does_human_start());
    assert_eq!(engine.move_count().get(Seat::Computer), 1);
    assert_eq!(engine.move_count().get(Seat::Human), 0);
    assert_eq!(engine.current_turn().seat(), &Seat::Human);
}

#[test]
fn test_opening_move_is_top_left() {
    // Every opening draws with best play, so row-major order breaks the tie.
    let mut engine = engine_with(FirstPlayer::Computer, Mark::O);
    engine.reset_game().unwrap();
    assert_eq!(
        engine.board().get(Position::TopLeft),
        Square::Occupied(Mark::X)
    );
}

#[test]
fn test_random_start_uses_both_seats() {
    let config = GameConfig::default().with_seed(3);
    let mut engine = GameEngine::new(&config).unwrap();
    let mut seen = Vec::new();
    for _ in 0..16 {
        engine.reset_game().unwrap();
        seen.push(engine.does_human_start());
    }
    assert!(seen.contains(&true));
    assert!(seen.contains(&false));
}

#[test]
fn test_same_seed_same_starts() {
    let config = GameConfig::default().with_seed(99);
    let mut a = GameEngine::new(&config).unwrap();
    let mut b = GameEngine::new(&config).unwrap();
    for _ in 0..8 {
        a.reset_game().unwrap();
        b.reset_game().unwrap();
        assert_eq!(a.does_human_start(), b.does_human_start());
        assert_eq!(a.board(), b.board());
    }
}

#[test]
fn test_wrong_turn_is_rejected_without_side_effects() {
    let mut engine = human_x_first();
    let before = engine.state().clone();

    assert_eq!(
        engine.try_apply_move(Seat::Computer, Position::Center),
        Err(MoveError::WrongTurn(Seat::Computer))
    );
    assert!(!engine.apply_move(Seat::Computer, Position::Center));
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.current_turn().seat(), &Seat::Human);
}

#[test]
fn test_occupied_square_is_rejected() {
    let mut engine = human_x_first();
    play(&mut engine, &[(Seat::Human, Position::Center)]);
    let before = engine.state().clone();

    let err = engine
        .try_apply_move(Seat::Computer, Position::Center)
        .unwrap_err();
    assert_eq!(err, MoveError::SquareOccupied(Position::Center));
    assert!(err.is_illegal_move());
    assert!(err.to_string().contains("occupied"));
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_validate_move_does_not_mutate() {
    let engine = human_x_first();
    assert!(engine.validate_move(Seat::Human, Position::Center).is_ok());
    assert_eq!(
        engine.validate_move(Seat::Computer, Position::Center),
        Err(MoveError::WrongTurn(Seat::Computer))
    );
    assert_eq!(engine.move_count().total(), 0);
}

#[test]
fn test_row_win_ends_game() {
    let mut engine = human_x_first();
    play(
        &mut engine,
        &[
            (Seat::Human, Position::TopLeft),
            (Seat::Computer, Position::MiddleLeft),
            (Seat::Human, Position::TopCenter),
            (Seat::Computer, Position::Center),
            (Seat::Human, Position::TopRight),
        ],
    );

    assert_eq!(engine.status(), GameStatus::Won(Seat::Human));
    assert!(engine.is_terminal());
    assert_eq!(
        engine.try_apply_move(Seat::Computer, Position::BottomLeft),
        Err(MoveError::GameAlreadyOver)
    );
}

#[test]
fn test_diagonal_win_on_last_square_is_a_win_not_a_tie() {
    // X fills the board and completes the main diagonal with the final move.
    let mut engine = human_x_first();
    play(
        &mut engine,
        &[
            (Seat::Human, Position::TopLeft),
            (Seat::Computer, Position::TopCenter),
            (Seat::Human, Position::TopRight),
            (Seat::Computer, Position::MiddleLeft),
            (Seat::Human, Position::Center),
            (Seat::Computer, Position::BottomLeft),
            (Seat::Human, Position::MiddleRight),
            (Seat::Computer, Position::BottomCenter),
            (Seat::Human, Position::BottomRight),
        ],
    );
    assert_eq!(engine.status(), GameStatus::Won(Seat::Human));
}

#[test]
fn test_full_board_without_line_is_tied_immediately() {
    // X O X
    // X O O
    // O X X
    let mut engine = human_x_first();
    play(
        &mut engine,
        &[
            (Seat::Human, Position::TopLeft),
            (Seat::Computer, Position::TopCenter),
            (Seat::Human, Position::TopRight),
            (Seat::Computer, Position::Center),
            (Seat::Human, Position::MiddleLeft),
            (Seat::Computer, Position::MiddleRight),
            (Seat::Human, Position::BottomCenter),
            (Seat::Computer, Position::BottomLeft),
            (Seat::Human, Position::BottomRight),
        ],
    );

    assert_eq!(engine.status(), GameStatus::Tied);
    assert!(engine.is_terminal());
    for pos in Position::ALL {
        assert!(!engine.apply_move(Seat::Human, pos));
        assert!(!engine.apply_move(Seat::Computer, pos));
    }
    assert_eq!(engine.request_automated_move(), Ok(None));
    assert_eq!(engine.status(), GameStatus::Tied);
}

#[test]
fn test_play_human_move_triggers_reply() {
    let mut engine = engine_with(FirstPlayer::Human, Mark::O);
    engine.reset_game().unwrap();

    assert_eq!(engine.play_human_move(Position::Center), Ok(true));
    assert_eq!(engine.move_count().get(Seat::Human), 1);
    assert_eq!(engine.move_count().get(Seat::Computer), 1);
    assert_eq!(engine.current_turn().seat(), &Seat::Human);

    // A rejected move gets no reply.
    assert_eq!(engine.play_human_move(Position::Center), Ok(false));
    assert_eq!(engine.move_count().total(), 2);
}

#[test]
fn test_automated_move_waits_for_its_turn() {
    let mut engine = human_x_first();
    assert_eq!(engine.request_automated_move(), Ok(None));
    assert_eq!(engine.move_count().total(), 0);

    play(&mut engine, &[(Seat::Human, Position::TopLeft)]);
    let reply = engine.request_automated_move().unwrap();
    assert!(reply.is_some());
    assert_eq!(engine.move_count().get(Seat::Computer), 1);
}

#[test]
fn test_computer_blocks_open_row() {
    // Human X threatens the top row; O must take the top-right square.
    let mut engine = human_x_first();
    play(
        &mut engine,
        &[
            (Seat::Human, Position::TopLeft),
            (Seat::Computer, Position::Center),
            (Seat::Human, Position::TopCenter),
        ],
    );
    assert_eq!(engine.request_automated_move(), Ok(Some(Position::TopRight)));
}

#[test]
fn test_events_follow_game_flow() {
    let mut engine = engine_with(FirstPlayer::Human, Mark::O);
    engine.reset_game().unwrap();
    assert_eq!(
        engine.drain_events(),
        vec![
            GameEvent::GameStarted {
                starting: Seat::Human
            },
            GameEvent::TurnStarted(Seat::Human),
        ]
    );

    engine.play_human_move(Position::Center).unwrap();
    let events = engine.drain_events();
    assert_eq!(events.len(), 4);
    assert_eq!(
        events[0],
        GameEvent::MoveApplied {
            seat: Seat::Human,
            position: Position::Center,
            mark: Mark::O,
        }
    );
    assert_eq!(events[1], GameEvent::TurnStarted(Seat::Computer));
    assert!(matches!(
        events[2],
        GameEvent::MoveApplied {
            seat: Seat::Computer,
            mark: Mark::X,
            ..
        }
    ));
    assert_eq!(events[3], GameEvent::TurnStarted(Seat::Human));
    assert!(engine.drain_events().is_empty());
}

#[test]
fn test_rejections_emit_no_events() {
    let mut engine = human_x_first();
    engine.drain_events();
    assert!(!engine.apply_move(Seat::Computer, Position::Center));
    assert!(engine.drain_events().is_empty());
}

#[test]
fn test_game_ended_event_carries_outcome() {
    let mut engine = human_x_first();
    play(
        &mut engine,
        &[
            (Seat::Human, Position::TopLeft),
            (Seat::Computer, Position::TopCenter),
            (Seat::Human, Position::Center),
            (Seat::Computer, Position::TopRight),
            (Seat::Human, Position::BottomRight),
        ],
    );
    let events = engine.drain_events();
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameEnded(Outcome::Won(Seat::Human)))
    );
}

#[test]
fn test_player_info() {
    let config = GameConfig::default().with_names("Ada", "Deep Thought");
    let engine = GameEngine::new(&config).unwrap();
    assert_eq!(engine.human().info(), "Ada is playing O.");
    assert_eq!(engine.computer().info(), "Deep Thought is playing X.");
    assert_eq!(engine.player(Seat::Computer).name(), "Deep Thought");
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = GameConfig::default().with_names("", "Computer");
    assert!(GameEngine::new(&config).is_err());
}

#[test]
fn test_events_serialize_for_front_ends() {
    let event = GameEvent::MoveApplied {
        seat: Seat::Computer,
        position: Position::Center,
        mark: Mark::X,
    };
    let json = serde_json::to_value(event).expect("Event should serialize");
    assert_eq!(json["MoveApplied"]["seat"], "computer");
    assert_eq!(json["MoveApplied"]["position"], "Center");
    assert_eq!(json["MoveApplied"]["mark"], "X");

    let ended: GameEvent =
        serde_json::from_str(r#"{"GameEnded":"Tied"}"#).expect("Event should parse");
    assert_eq!(ended, GameEvent::GameEnded(Outcome::Tied));
}
