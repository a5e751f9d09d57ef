//! Command-line interface for timed_tictactoe.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use timed_tictactoe_engine::MessageStyle;

use crate::config::DEFAULT_CONFIG_PATH;

/// Timed Tic-Tac-Toe - two players, ten seconds a turn
#[derive(Parser, Debug)]
#[command(name = "timed_tictactoe")]
#[command(about = "Two-player tic-tac-toe with a per-turn countdown", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Seconds per turn
        #[arg(short, long)]
        turn_seconds: Option<u32>,

        /// Status message style (plain or taunt)
        #[arg(short, long)]
        style: Option<MessageStyle>,
    },

    /// Run a move script without a terminal UI
    ///
    /// Tokens: 0-8 or a cell name (`center`, `top-left`, ...) place a mark,
    /// `t` times out the turn, `.` ticks the countdown once, `r` restarts.
    Replay {
        /// Script, e.g. "0 1 3 2 6"
        script: String,

        /// Seconds per turn
        #[arg(short, long)]
        turn_seconds: Option<u32>,

        /// Status message style (plain or taunt)
        #[arg(short, long)]
        style: Option<MessageStyle>,

        /// Print every notification as a JSON line
        #[arg(long)]
        events: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
