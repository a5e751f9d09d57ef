//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine calls these
//! after every accepted placement and never after a forfeited turn.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, WinningLine, check_winner, winning_line};
