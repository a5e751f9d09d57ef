//! The turn and countdown state machine.

use tracing::{debug, info, instrument};

use crate::observer::{GameEvent, GameObserver};
use crate::position::Position;
use crate::rules::{self, WinningLine};
use crate::settings::EngineSettings;
use crate::status::{GameStatus, StatusMessages};
use crate::timer::{TimerLease, TurnClock, TurnTimer};
use crate::types::{Board, Player, Square};

/// Tic-tac-toe game with a per-turn countdown.
///
/// The engine owns the board, the turn, and the countdown. It is driven by
/// three inputs: [`place_mark`](Self::place_mark), [`restart`](Self::restart)
/// and clock ticks delivered through [`tick`](Self::tick). Every visible
/// change is reported to the observer `O`; the clock `C` is told when to
/// start and stop ticking.
///
/// Invalid input (occupied cell, out-of-range index, finished game, stale
/// tick) is ignored without touching state.
#[derive(Debug)]
pub struct GameEngine<C, O> {
    board: Board,
    status: GameStatus,
    current_player: Player,
    moves: Vec<Position>,
    winning_line: Option<WinningLine>,
    timer: TurnTimer,
    messages: StatusMessages,
    clock: C,
    observer: O,
}

impl<C: TurnClock, O: GameObserver> GameEngine<C, O> {
    /// Creates a game with default settings and starts X's turn.
    pub fn new(clock: C, observer: O) -> Self {
        Self::with_settings(EngineSettings::default(), clock, observer)
    }

    /// Creates a game with `settings` and starts X's turn.
    #[instrument(skip(clock, observer))]
    pub fn with_settings(settings: EngineSettings, clock: C, observer: O) -> Self {
        let mut engine = Self {
            board: Board::new(),
            status: GameStatus::InProgress(Player::X),
            current_player: Player::X,
            moves: Vec::new(),
            winning_line: None,
            timer: TurnTimer::new(*settings.turn_seconds()),
            messages: settings.messages().clone(),
            clock,
            observer,
        };
        engine.restart();
        engine
    }

    /// Places the current player's mark at board index `index` (0-8).
    ///
    /// Returns whether the placement was accepted.
    pub fn place_mark(&mut self, index: usize) -> bool {
        match Position::from_index(index) {
            Some(position) => self.place(position),
            None => {
                debug!(index, "Ignoring placement outside the board");
                false
            }
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// Returns whether the placement was accepted.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn place(&mut self, position: Position) -> bool {
        let GameStatus::InProgress(player) = self.status else {
            debug!("Ignoring placement after game end");
            return false;
        };
        if !self.board.is_empty(position) {
            debug!("Ignoring placement on occupied square");
            return false;
        }

        let square = Square::Occupied(player);
        self.board.set(position, square);
        self.moves.push(position);
        self.timer.reset();
        info!(%player, %position, move_count = self.moves.len(), "Mark placed");
        self.observer.notify(&GameEvent::CellChanged { position, square });

        if let Some((_, line)) = rules::winning_line(&self.board) {
            self.winning_line = Some(line);
            self.finish(GameStatus::Won(player));
        } else if rules::is_draw(&self.board) {
            self.finish(GameStatus::Draw);
        } else {
            self.switch_turn(player);
        }
        true
    }

    /// Forfeits the current player's turn because their time ran out.
    ///
    /// Does nothing once the game is over. The board is not touched and
    /// win/draw is not re-evaluated.
    #[instrument(skip(self))]
    pub fn time_expired(&mut self) {
        let GameStatus::InProgress(player) = self.status else {
            debug!("Ignoring expiry after game end");
            return;
        };
        info!(%player, "Turn timed out");
        self.observer.notify(&GameEvent::TurnForfeited { player });
        self.switch_turn(player);
    }

    /// Counts down one second of the turn identified by `lease`.
    ///
    /// Ticks for any lease but the current one are ignored. Reaching zero
    /// fires [`time_expired`](Self::time_expired) once; the turn switch
    /// issues a new lease, so later ticks for `lease` are stale.
    #[instrument(level = "debug", skip(self), fields(%lease))]
    pub fn tick(&mut self, lease: TimerLease) {
        if self.status.is_over() {
            debug!("Ignoring tick after game end");
            return;
        }
        let Some(remaining) = self.timer.tick(lease) else {
            return;
        };
        self.observer.notify(&GameEvent::TimerChanged { remaining });
        if remaining == 0 {
            self.time_expired();
        }
    }

    /// Clears the board and starts a new game with X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Starting new game");
        self.board.clear();
        self.moves.clear();
        self.winning_line = None;
        self.current_player = Player::X;
        self.observer.notify(&GameEvent::BoardCleared);
        self.set_status(GameStatus::InProgress(Player::X));
        self.start_countdown();
    }

    fn switch_turn(&mut self, from: Player) {
        self.current_player = from.opponent();
        self.set_status(GameStatus::InProgress(self.current_player));
        self.start_countdown();
    }

    fn finish(&mut self, status: GameStatus) {
        self.timer.stop();
        self.clock.stop();
        info!(?status, "Game over");
        self.observer.notify(&GameEvent::TimerChanged {
            remaining: self.timer.remaining(),
        });
        self.set_status(status);
    }

    fn start_countdown(&mut self) {
        let lease = self.timer.start();
        self.clock.start(lease);
        debug!(%lease, seconds = self.timer.remaining(), "Countdown started");
        self.observer.notify(&GameEvent::TimerChanged {
            remaining: self.timer.remaining(),
        });
    }

    fn set_status(&mut self, status: GameStatus) {
        self.status = status;
        let text = self.messages.render(&status);
        self.observer.notify(&GameEvent::StatusChanged { status, text });
    }
}

impl<C, O> GameEngine<C, O> {
    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player to move, or the last player to move once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Positions played since the last restart, in order.
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// Number of accepted placements since the last restart.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Seconds left in the current turn.
    pub fn time_left(&self) -> u32 {
        self.timer.remaining()
    }

    /// The countdown.
    pub fn timer(&self) -> &TurnTimer {
        &self.timer
    }

    /// The completed line, once the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Status line for the current status.
    pub fn status_text(&self) -> String {
        self.messages.render(&self.status)
    }

    /// The clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer, e.g. to drain recorded events.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}
