//! Notifications emitted by the engine.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::status::GameStatus;
use crate::types::{Player, Square};

/// A state change the UI should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Status changed; `text` is the rendered status line.
    StatusChanged {
        /// New status.
        status: GameStatus,
        /// Status line for display.
        text: String,
    },
    /// A cell received a mark.
    CellChanged {
        /// Cell that changed.
        position: Position,
        /// New contents.
        square: Square,
    },
    /// Every cell was emptied.
    BoardCleared,
    /// Timer readout changed.
    TimerChanged {
        /// Seconds left in the turn.
        remaining: u32,
    },
    /// The player ran out of time and lost the turn.
    TurnForfeited {
        /// Player who forfeited.
        player: Player,
    },
}

/// Sink for [`GameEvent`]s.
pub trait GameObserver {
    /// Receives one notification.
    fn notify(&mut self, event: &GameEvent);
}

/// Records every event.
impl GameObserver for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Discards every event.
impl GameObserver for () {
    fn notify(&mut self, _event: &GameEvent) {}
}
