//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use timed_tictactoe_engine::Position;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor.
    Cursor(Direction),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a specific cell.
    Place(Position),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key to a command. Digits 1-9 address cells like a phone keypad
/// read left to right, top to bottom.
pub fn command_for(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::Cursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::Cursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Cursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Command::Place),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
