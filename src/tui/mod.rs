//! Terminal UI for timed tic-tac-toe.

mod app;
mod input;
mod ui;
mod view;

pub use app::App;
pub use input::{Command, Direction, command_for, move_cursor};
pub use ui::{cell_at, cell_rects};
pub use view::BoardView;

use std::io::{self, Stdout};
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{error, info, instrument, warn};

use crate::clock::TokioClock;
use crate::config::AppConfig;
use crate::event::AppEvent;
use crate::logging;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the terminal game until the user quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    logging::init_file_logging(config.log_file())?;
    info!(turn_seconds = *config.turn_seconds(), "Starting Timed Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::unbounded_channel();
    let reader = spawn_input_reader(tx.clone());

    let clock = TokioClock::new(tx, config.tick_period());
    let app = App::new(config.engine_settings(), clock);
    let res = run_game(&mut terminal, app, rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if reader.join().is_err() {
        warn!("Input reader panicked");
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Single loop owning the engine: every tick and key press passes through here.
#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Term,
    mut app: App<TokioClock>,
    mut rx: UnboundedReceiver<AppEvent>,
) -> Result<()> {
    terminal.draw(|f| ui::draw(f, &app))?;

    while let Some(event) = rx.recv().await {
        let size = terminal.size()?;
        app.handle_event(event, Rect::new(0, 0, size.width, size.height));
        if app.should_quit() {
            info!("User quit");
            break;
        }
        terminal.draw(|f| ui::draw(f, &app))?;
    }

    // Closing the receiver stops the input reader.
    rx.close();
    Ok(())
}

/// Forwards terminal events into the loop's channel from a blocking thread.
fn spawn_input_reader(tx: UnboundedSender<AppEvent>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.send(AppEvent::Input(ev)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, "Failed to poll terminal");
                    break;
                }
            }
        }
    })
}
