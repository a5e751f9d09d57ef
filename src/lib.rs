//! Timed Tic-Tac-Toe
//!
//! Two players share one terminal; each gets a fixed number of seconds per
//! turn and loses the turn when the countdown runs out.
//!
//! # Architecture
//!
//! - **Engine** ([`timed_tictactoe_engine`]): board, rules and the turn/timer
//!   state machine, free of I/O.
//! - **Clock**: [`TokioClock`] turns the engine's countdown into ticks on
//!   the host event channel.
//! - **TUI**: ratatui front end; one loop owns the engine and consumes
//!   every input and tick in order.
//! - **Replay**: scripted, headless games for checking outcomes.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod clock;
mod config;
mod event;
mod logging;
mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use clock::{TickGuard, TokioClock};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use event::AppEvent;
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{ReplayReport, ScriptError, Step, parse_script, run as run_replay};

pub use timed_tictactoe_engine as engine;
