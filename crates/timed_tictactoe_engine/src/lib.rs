//! Tic-tac-toe with a per-turn countdown.
//!
//! [`GameEngine`] is a plain state machine. Hosts feed it placements,
//! restarts and clock ticks, and render the [`GameEvent`]s it reports.
//!
//! # Example
//!
//! ```
//! use timed_tictactoe_engine::{GameEngine, GameStatus, ManualClock, Player};
//!
//! let mut engine = GameEngine::new(ManualClock::new(), ());
//! for index in [0, 1, 3, 2, 6] {
//!     engine.place_mark(index);
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod observer;
mod position;
pub mod rules;
mod settings;
mod status;
mod timer;
mod types;

pub use engine::GameEngine;
pub use observer::{GameEvent, GameObserver};
pub use position::Position;
pub use rules::{WINNING_LINES, WinningLine};
pub use settings::EngineSettings;
pub use status::{GameStatus, MessageStyle, StatusMessages};
pub use timer::{DEFAULT_TURN_SECONDS, ManualClock, TimerLease, TurnClock, TurnTimer};
pub use types::{Board, Player, Square};
