//! Headless move scripts.
//!
//! A script is a list of tokens separated by whitespace or commas:
//! `0`-`8` or a cell name such as `center` place a mark, `t` times out
//! the current turn, `.` ticks the countdown once and `r` restarts.

use derive_more::{Display, Error};
use timed_tictactoe_engine::{
    Board, EngineSettings, GameEngine, GameEvent, GameStatus, ManualClock, Position,
};
use tracing::{debug, instrument};

/// One scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Place a mark at board index 0-8.
    Place(usize),
    /// The current turn runs out of time.
    Expire,
    /// One countdown tick.
    Tick,
    /// Start over.
    Restart,
}

/// Script parse error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses a script into steps.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<Step>, ScriptError> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| match token {
            "t" | "T" => Ok(Step::Expire),
            "." => Ok(Step::Tick),
            "r" | "R" => Ok(Step::Restart),
            cell => Position::from_label_or_number(cell)
                .map(|position| Step::Place(position.to_index()))
                .ok_or_else(|| {
                    ScriptError::new(format!(
                        "token {} ({:?}) is not 0-8, a cell name, t, . or r",
                        i + 1,
                        token
                    ))
                }),
        })
        .collect()
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    /// Final board.
    pub board: Board,
    /// Final status.
    pub status: GameStatus,
    /// Final status line.
    pub status_text: String,
    /// Seconds left on the clock.
    pub time_left: u32,
    /// Every notification, in order.
    pub events: Vec<GameEvent>,
}

impl ReplayReport {
    /// Board, status and timer as printable text.
    pub fn summary(&self) -> String {
        format!(
            "{}\n\n{}\nTime Left: {}s",
            self.board.display(),
            self.status_text,
            self.time_left
        )
    }
}

/// Runs `steps` on a fresh engine driven by a [`ManualClock`].
#[instrument(skip(settings, steps), fields(steps = steps.len()))]
pub fn run(settings: EngineSettings, steps: &[Step]) -> ReplayReport {
    let mut engine = GameEngine::with_settings(settings, ManualClock::new(), Vec::new());
    for step in steps {
        debug!(?step, "Applying step");
        match *step {
            Step::Place(index) => {
                engine.place_mark(index);
            }
            Step::Expire => engine.time_expired(),
            Step::Tick => {
                if let Some(lease) = engine.clock().active() {
                    engine.tick(lease);
                }
            }
            Step::Restart => engine.restart(),
        }
    }

    ReplayReport {
        board: engine.board().clone(),
        status: engine.status(),
        status_text: engine.status_text(),
        time_left: engine.time_left(),
        events: std::mem::take(engine.observer_mut()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_tokens() {
        let steps = parse_script("4, t . r 8").expect("valid script");
        assert_eq!(
            steps,
            [
                Step::Place(4),
                Step::Expire,
                Step::Tick,
                Step::Restart,
                Step::Place(8)
            ]
        );
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = parse_script("0 9").unwrap_err();
        assert!(err.message.contains("token 2"));
        assert!(parse_script("0 x").is_err());
        assert!(parse_script("middle").is_err());
    }

    #[test]
    fn test_parse_cell_names() {
        let steps = parse_script("Center, top-left BOTTOM-RIGHT").expect("valid script");
        assert_eq!(steps, [Step::Place(4), Step::Place(0), Step::Place(8)]);
    }

    #[test]
    fn test_empty_script_is_fresh_game() {
        let report = run(EngineSettings::default(), &[]);
        assert_eq!(report.status, GameStatus::InProgress(timed_tictactoe_engine::Player::X));
        assert_eq!(report.time_left, 10);
    }
}
