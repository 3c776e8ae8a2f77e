//! Tests for time travel through the move history.

use strictly_timetravel::{Board, GameEngine, GameError, GameStatus, Player, Position};

fn sample_game() -> GameEngine {
    GameEngine::from_positions(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
    ])
    .expect("Valid game")
}

#[test]
fn test_replay_to_start_resets() {
    let mut engine = sample_game();

    let status = engine.replay(0).unwrap();

    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.to_move(), Player::X);
    assert_eq!(engine.selected(), None);
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_replay_sets_turn_from_snapshot_move() {
    let mut engine = sample_game();

    engine.replay(1).unwrap();
    assert_eq!(engine.to_move(), Player::O);
    assert_eq!(engine.selected(), Some(Position::Center));
    assert_eq!(engine.status_text(), "Next player: O");
}

#[test]
fn test_replay_twice_is_idempotent() {
    let mut engine = sample_game();

    engine.replay(2).unwrap();
    let once = engine.clone();
    engine.replay(2).unwrap();

    assert_eq!(engine, once);
}

#[test]
fn test_replay_out_of_range() {
    let mut engine = sample_game();
    assert_eq!(
        engine.replay(5),
        Err(GameError::IndexOutOfRange { index: 5, len: 5 })
    );
    assert_eq!(engine.history().len(), 5);
}

#[test]
fn test_play_after_replay_branches() {
    let mut engine = sample_game();

    engine.replay(1).unwrap();
    engine.play(2, 0).unwrap();

    assert_eq!(engine.history().len(), 3);
    let descriptions: Vec<String> = engine.moves().iter().map(|e| e.description()).collect();
    assert_eq!(
        descriptions,
        vec![
            "Go to game start".to_string(),
            "Go to move #1 X - (1,1)".to_string(),
            "Go to move #2 O - (0,2)".to_string(),
        ]
    );
    // The discarded branch's squares are free again
    assert!(engine.board().is_empty(Position::TopLeft));
}

#[test]
fn test_replay_into_won_position_restores_win() {
    let mut engine = GameEngine::from_positions(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ])
    .unwrap();

    engine.replay(5).unwrap();
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
    assert_eq!(engine.play(2, 2), Err(GameError::GameOver));

    engine.replay(4).unwrap();
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.to_move(), Player::X);
    assert_eq!(engine.winning_line(), None);

    // A different branch from the same point
    assert_eq!(engine.play(2, 2).unwrap(), GameStatus::InProgress);
    assert_eq!(engine.to_move(), Player::O);
}

#[test]
fn test_replay_leaves_earlier_snapshots_untouched() {
    let mut engine = sample_game();
    let prefix: Vec<Board> = engine
        .history()
        .iter()
        .take(3)
        .map(|s| s.board().clone())
        .collect();

    engine.replay(2).unwrap();
    engine.play(0, 1).unwrap();

    for (index, board) in prefix.iter().enumerate() {
        assert_eq!(engine.history().get(index).unwrap().board(), board);
    }
}
