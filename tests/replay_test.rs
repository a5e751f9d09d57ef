//! End-to-end scripted games.

use timed_tictactoe::engine::{EngineSettings, GameEvent, GameStatus, Player, StatusMessages};
use timed_tictactoe::{parse_script, run_replay};

fn replay(script: &str) -> timed_tictactoe::ReplayReport {
    let steps = parse_script(script).expect("valid script");
    run_replay(EngineSettings::default(), &steps)
}

#[test]
fn test_column_win() {
    let report = replay("0 1 3 2 6");
    assert_eq!(report.status, GameStatus::Won(Player::X));
    assert_eq!(report.status_text, "Player X has won!");
    assert_eq!(report.board.display(), "X|O|O\n-+-+-\nX|5|6\n-+-+-\nX|8|9");
}

#[test]
fn test_draw() {
    let report = replay("0,1,2,3,4,6,5,8,7");
    assert_eq!(report.status, GameStatus::Draw);
    assert_eq!(report.status_text, "Game ended in a draw!");
}

#[test]
fn test_forfeit_then_draw_with_cell_names() {
    let report = replay("t top-center top-left 3 2 middle-right center 6 7 8");
    assert_eq!(report.status, GameStatus::Draw);
    assert_eq!(report.board.display(), "X|O|X\n-+-+-\nO|X|O\n-+-+-\nO|X|O");
}

#[test]
fn test_ten_ticks_forfeit_once() {
    let report = replay(". . . . . . . . . .");
    let forfeits = report
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::TurnForfeited { .. }))
        .count();
    assert_eq!(forfeits, 1);
    assert_eq!(report.status, GameStatus::InProgress(Player::O));
    assert_eq!(report.time_left, 10);
}

#[test]
fn test_partial_countdown() {
    let report = replay("4 . . .");
    assert_eq!(report.status, GameStatus::InProgress(Player::O));
    assert_eq!(report.time_left, 7);
    assert!(report.summary().ends_with("Time Left: 7s"));
}

#[test]
fn test_expiry_then_restart() {
    let report = replay("t 4 r");
    assert_eq!(report.status, GameStatus::InProgress(Player::X));
    assert_eq!(report.board.occupied(), 0);
}

#[test]
fn test_moves_after_win_ignored() {
    let report = replay("0 1 3 2 6 8 7");
    assert_eq!(report.board.occupied(), 5);
}

#[test]
fn test_custom_turn_length() {
    let steps = parse_script(". .").expect("valid");
    let report = run_replay(EngineSettings::new(2, StatusMessages::default()), &steps);
    assert_eq!(report.status, GameStatus::InProgress(Player::O));
}
