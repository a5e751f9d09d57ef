//! Game status and the text shown for it.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::Player;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the player to move.
    InProgress(Player),
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Preset wording for status messages.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageStyle {
    /// Neutral prompts.
    #[default]
    Plain,
    /// Heckling prompts.
    Taunt,
}

/// Templates for the status line. `{player}` is replaced by the mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct StatusMessages {
    /// Shown while a player is to move.
    turn: String,
    /// Shown when a player has won.
    win: String,
    /// Shown when the board fills with no winner.
    draw: String,
}

impl StatusMessages {
    /// Placeholder substituted with the player's mark.
    pub const PLAYER: &'static str = "{player}";

    /// Creates messages from custom templates.
    pub fn new(turn: impl Into<String>, win: impl Into<String>, draw: impl Into<String>) -> Self {
        Self {
            turn: turn.into(),
            win: win.into(),
            draw: draw.into(),
        }
    }

    /// Messages for a preset style.
    #[instrument]
    pub fn preset(style: MessageStyle) -> Self {
        match style {
            MessageStyle::Plain => Self::new(
                "It's {player}'s turn",
                "Player {player} has won!",
                "Game ended in a draw!",
            ),
            MessageStyle::Taunt => Self::new(
                "OI YOU😡, PAY ATTENTION! It's {player}'s turn",
                "LOOOOSER🤪. Player {player} is BETTER THAN YOU and has won!",
                "Game ended in a draw!",
            ),
        }
    }

    /// Renders the status line for `status`.
    pub fn render(&self, status: &GameStatus) -> String {
        match status {
            GameStatus::InProgress(player) => self.turn.replace(Self::PLAYER, &player.to_string()),
            GameStatus::Won(player) => self.win.replace(Self::PLAYER, &player.to_string()),
            GameStatus::Draw => self.draw.clone(),
        }
    }
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self::preset(MessageStyle::Plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_plain_messages() {
        let messages = StatusMessages::default();
        assert_eq!(messages.render(&GameStatus::InProgress(Player::O)), "It's O's turn");
        assert_eq!(messages.render(&GameStatus::Won(Player::X)), "Player X has won!");
        assert_eq!(messages.render(&GameStatus::Draw), "Game ended in a draw!");
    }

    #[test]
    fn test_taunt_names_winner() {
        let messages = StatusMessages::preset(MessageStyle::Taunt);
        assert!(messages.render(&GameStatus::Won(Player::O)).contains("Player O is BETTER"));
    }

    #[test]
    fn test_style_parses_lowercase() {
        assert_eq!(MessageStyle::from_str("taunt").ok(), Some(MessageStyle::Taunt));
        assert_eq!(MessageStyle::Plain.to_string(), "plain");
        assert!(MessageStyle::from_str("loud").is_err());
    }

    #[test]
    fn test_status_queries() {
        assert!(!GameStatus::InProgress(Player::X).is_over());
        assert!(GameStatus::Won(Player::O).is_over());
        assert!(GameStatus::Draw.is_over());
    }

    #[test]
    fn test_default_style_is_plain() {
        assert_eq!(MessageStyle::default(), MessageStyle::Plain);
        assert_eq!(StatusMessages::default(), StatusMessages::preset(MessageStyle::Plain));
    }
}
