//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// Three positions that win when held by one player.
pub type WinningLine = [Position; 3];

/// Every winning line, checked in this order: rows, columns, diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and its owner.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some((player, [a, b, c]))
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
