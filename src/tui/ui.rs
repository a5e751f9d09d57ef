//! Stateless UI rendering for the timed board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use timed_tictactoe_engine::{GameStatus, Player, Position, Square};

use super::app::App;

/// Width of one cell, borders included.
const CELL_WIDTH: u16 = 11;
/// Height of one cell, borders included.
const CELL_HEIGHT: u16 = 3;

const HELP: &str = "arrows/hjkl move · enter/space or 1-9 or click to play · r restart · q quit";

/// Splits the frame into title, timer, board, status and help rows.
fn frame_rows(area: Rect) -> [Rect; 5] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Title
            Constraint::Length(1),                // Timer
            Constraint::Min(CELL_HEIGHT * 3),     // Board
            Constraint::Length(3),                // Status
            Constraint::Length(1),                // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]]
}

/// Screen rectangle of every cell, in board index order.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let board = center_rect(frame_rows(area)[2], CELL_WIDTH * 3, CELL_HEIGHT * 3);
    Position::ALL.map(|pos| {
        Rect::new(
            board.x + pos.col() as u16 * CELL_WIDTH,
            board.y + pos.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area)
    })
}

/// Cell under a screen coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    cell_rects(area)
        .iter()
        .position(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
        .and_then(Position::from_index)
}

/// Renders the whole screen.
pub fn draw<C>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();
    let [title_area, timer_area, _, status_area, help_area] = frame_rows(area);

    let title = Paragraph::new("Timed Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let view = app.view();
    let timer_style = match view.status() {
        GameStatus::InProgress(_) if app.time_left() <= 3 => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
        GameStatus::InProgress(_) => Style::default().fg(Color::Green),
        _ => Style::default().fg(Color::DarkGray),
    };
    let timer = Paragraph::new(view.timer_text())
        .style(timer_style)
        .alignment(Alignment::Center);
    frame.render_widget(timer, timer_area);

    let winning = app.winning_line();
    for (pos, rect) in Position::ALL.into_iter().zip(cell_rects(area)) {
        let on_line = winning.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, rect, view.cell(pos), pos == app.cursor(), on_line);
    }

    let mut status = view.status_text().to_string();
    if let Some(player) = view.forfeited() {
        status = format!("{player} ran out of time. {status}");
    }
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, status_area);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, cursor: bool, winning: bool) {
    let base_style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let border_style = if cursor {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(square.symbol(), style)))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use timed_tictactoe_engine::{EngineSettings, ManualClock};

    #[test]
    fn test_cells_tile_the_board() {
        let area = Rect::new(0, 0, 80, 24);
        let cells = cell_rects(area);
        assert_eq!(cells[1].x, cells[0].x + CELL_WIDTH);
        assert_eq!(cells[3].y, cells[0].y + CELL_HEIGHT);
        assert_eq!(cells[8].x, cells[0].x + 2 * CELL_WIDTH);
    }

    #[test]
    fn test_hit_testing_finds_cell() {
        let area = Rect::new(0, 0, 80, 24);
        for (i, rect) in cell_rects(area).iter().enumerate() {
            let hit = cell_at(area, rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(hit, Position::from_index(i));
        }
        assert_eq!(cell_at(area, 0, 0), None);
    }

    #[test]
    fn test_draw_renders_timer_and_status() {
        let app = App::new(EngineSettings::default(), ManualClock::new());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test backend");
        terminal.draw(|f| draw(f, &app)).expect("draw");

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Time Left: 10s"));
        assert!(screen.contains("It's X's turn"));
    }
}
