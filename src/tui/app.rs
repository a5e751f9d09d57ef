//! Application state and event handling.

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use timed_tictactoe_engine::{EngineSettings, GameEngine, Position, TurnClock, WinningLine};
use tracing::{debug, instrument};

use super::input::{Command, command_for, move_cursor};
use super::ui;
use super::view::BoardView;
use crate::event::AppEvent;

/// Main application state.
#[derive(Debug)]
pub struct App<C> {
    engine: GameEngine<C, BoardView>,
    cursor: Position,
    should_quit: bool,
}

impl<C: TurnClock> App<C> {
    /// Creates an application and starts the first game.
    pub fn new(settings: EngineSettings, clock: C) -> Self {
        Self {
            engine: GameEngine::with_settings(settings, clock, BoardView::new()),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Handles one event. `area` is the terminal size, used for mouse hits.
    #[instrument(level = "debug", skip(self))]
    pub fn handle_event(&mut self, event: AppEvent, area: Rect) {
        match event {
            AppEvent::Tick(lease) => self.engine.tick(lease),
            AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let Some(command) = command_for(key.code) {
                    self.apply(command);
                }
            }
            AppEvent::Input(Event::Mouse(mouse))
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
            {
                if let Some(position) = ui::cell_at(area, mouse.column, mouse.row) {
                    self.apply(Command::Place(position));
                }
            }
            AppEvent::Input(_) => {}
        }
    }

    /// Applies a command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Cursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Command::PlaceAtCursor => self.place(self.cursor),
            Command::Place(position) => {
                self.cursor = position;
                self.place(position);
            }
            Command::Restart => self.engine.restart(),
            Command::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, position: Position) {
        if !self.engine.place(position) {
            debug!(%position, "Placement ignored");
        }
    }
}

impl<C> App<C> {
    /// The game.
    pub fn engine(&self) -> &GameEngine<C, BoardView> {
        &self.engine
    }

    /// What to render.
    pub fn view(&self) -> &BoardView {
        self.engine.observer()
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Seconds left in the turn.
    pub fn time_left(&self) -> u32 {
        self.engine.time_left()
    }

    /// Completed line once the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.engine.winning_line()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
    use timed_tictactoe_engine::{GameStatus, ManualClock, Player, Square};

    fn area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn app() -> App<ManualClock> {
        App::new(EngineSettings::default(), ManualClock::new())
    }

    fn key(app: &mut App<ManualClock>, code: KeyCode) {
        let event = AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
        app.handle_event(event, area());
    }

    fn click(app: &mut App<ManualClock>, column: u16, row: u16) {
        let event = AppEvent::Input(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
        app.handle_event(event, area());
    }

    #[test]
    fn test_digit_keys_play_winning_game() {
        let mut app = app();
        for c in ['1', '2', '4', '3', '7'] {
            key(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.engine().status(), GameStatus::Won(Player::X));
        assert_eq!(app.view().status_text(), "Player X has won!");
        assert!(app.winning_line().is_some());
    }

    #[test]
    fn test_cursor_then_enter_places() {
        let mut app = app();
        key(&mut app, KeyCode::Up);
        key(&mut app, KeyCode::Left);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.view().cell(Position::TopLeft), Square::Occupied(Player::X));
    }

    #[test]
    fn test_click_places_in_cell() {
        let mut app = app();
        let rect = ui::cell_rects(area())[Position::BottomRight.to_index()];
        click(&mut app, rect.x + 1, rect.y + 1);
        assert_eq!(app.view().cell(Position::BottomRight), Square::Occupied(Player::X));
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_ticks_drive_countdown() {
        let mut app = app();
        for _ in 0..10 {
            let lease = app.engine().clock().active().expect("running");
            app.handle_event(AppEvent::Tick(lease), area());
        }
        assert_eq!(app.engine().current_player(), Player::O);
        assert_eq!(app.view().timer_text(), "Time Left: 10s");
    }

    #[test]
    fn test_restart_and_quit_keys() {
        let mut app = app();
        key(&mut app, KeyCode::Char('5'));
        key(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine().move_count(), 0);
        assert!(!app.should_quit());
        key(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
