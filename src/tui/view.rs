//! What the screen shows, updated from engine notifications.

use timed_tictactoe_engine::{GameEvent, GameObserver, GameStatus, Player, Position, Square};
use tracing::trace;

/// Render state fed by [`GameEvent`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    cells: [Square; 9],
    status: GameStatus,
    status_text: String,
    time_left: u32,
    forfeited: Option<Player>,
}

impl BoardView {
    /// Creates a blank view; the engine fills it in on construction.
    pub fn new() -> Self {
        Self {
            cells: [Square::Empty; 9],
            status: GameStatus::InProgress(Player::X),
            status_text: String::new(),
            time_left: 0,
            forfeited: None,
        }
    }

    /// Contents of one cell.
    pub fn cell(&self, position: Position) -> Square {
        self.cells[position.to_index()]
    }

    /// Last reported status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Status line.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Timer readout.
    pub fn timer_text(&self) -> String {
        format!("Time Left: {}s", self.time_left)
    }

    /// Player who last lost a turn to the clock, until the next placement.
    pub fn forfeited(&self) -> Option<Player> {
        self.forfeited
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObserver for BoardView {
    fn notify(&mut self, event: &GameEvent) {
        trace!(?event, "View update");
        match event {
            GameEvent::StatusChanged { status, text } => {
                self.status = *status;
                self.status_text = text.clone();
            }
            GameEvent::CellChanged { position, square } => {
                self.cells[position.to_index()] = *square;
                self.forfeited = None;
            }
            GameEvent::BoardCleared => {
                self.cells = [Square::Empty; 9];
                self.forfeited = None;
            }
            GameEvent::TimerChanged { remaining } => self.time_left = *remaining,
            GameEvent::TurnForfeited { player } => self.forfeited = Some(*player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timed_tictactoe_engine::{GameEngine, ManualClock};

    #[test]
    fn test_view_tracks_engine() {
        let mut engine = GameEngine::new(ManualClock::new(), BoardView::new());
        assert_eq!(engine.observer().status_text(), "It's X's turn");
        assert_eq!(engine.observer().timer_text(), "Time Left: 10s");

        engine.place_mark(4);
        assert_eq!(engine.observer().cell(Position::Center), Square::Occupied(Player::X));
        assert_eq!(engine.observer().status_text(), "It's O's turn");
    }

    #[test]
    fn test_forfeit_shown_until_next_mark() {
        let mut engine = GameEngine::new(ManualClock::new(), BoardView::new());
        engine.time_expired();
        assert_eq!(engine.observer().forfeited(), Some(Player::X));
        engine.place_mark(0);
        assert_eq!(engine.observer().forfeited(), None);
    }

    #[test]
    fn test_restart_clears_cells() {
        let mut engine = GameEngine::new(ManualClock::new(), BoardView::new());
        engine.place_mark(0);
        engine.restart();
        assert!(Position::ALL.iter().all(|p| engine.observer().cell(*p) == Square::Empty));
    }
}
