//! Events consumed by the single loop that owns the engine.

use timed_tictactoe_engine::TimerLease;

/// Everything the host loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// One countdown period elapsed for `lease`.
    Tick(TimerLease),
    /// Terminal input.
    Input(crossterm::event::Event),
}
