//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use timed_tictactoe_engine::{DEFAULT_TURN_SECONDS, EngineSettings, MessageStyle, StatusMessages};
use tracing::{debug, info, instrument};

/// Default location of the config file.
pub const DEFAULT_CONFIG_PATH: &str = "timed_tictactoe.toml";

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seconds each player gets per turn.
    #[serde(default = "default_turn_seconds")]
    turn_seconds: u32,

    /// Milliseconds between countdown ticks.
    #[serde(default = "default_tick_millis")]
    tick_millis: u64,

    /// Preset wording for the status line.
    #[serde(default)]
    style: MessageStyle,

    /// Custom status templates; overrides `style` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    messages: Option<StatusMessages>,

    /// Where the terminal UI writes its logs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_turn_seconds() -> u32 {
    DEFAULT_TURN_SECONDS
}

fn default_tick_millis() -> u64 {
    1000
}

fn default_log_file() -> PathBuf {
    PathBuf::from("timed_tictactoe.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            turn_seconds: default_turn_seconds(),
            tick_millis: default_tick_millis(),
            style: MessageStyle::default(),
            messages: None,
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(turn_seconds = config.turn_seconds, style = %config.style, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks value ranges.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_seconds == 0 {
            return Err(ConfigError::new("turn_seconds must be at least 1".to_string()));
        }
        if self.tick_millis == 0 {
            return Err(ConfigError::new("tick_millis must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        turn_seconds: Option<u32>,
        style: Option<MessageStyle>,
    ) -> Result<Self, ConfigError> {
        if let Some(seconds) = turn_seconds {
            self.turn_seconds = seconds;
        }
        if let Some(style) = style {
            debug!(%style, "Overriding message style");
            self.style = style;
            self.messages = None;
        }
        self.validate()?;
        Ok(self)
    }

    /// Period between countdown ticks.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Status templates in effect.
    pub fn status_messages(&self) -> StatusMessages {
        self.messages
            .clone()
            .unwrap_or_else(|| StatusMessages::preset(self.style))
    }

    /// Settings for the game engine.
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings::new(self.turn_seconds, self.status_messages())
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tick_period(), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_turn_rejected() {
        let err = AppConfig::from_toml("turn_seconds = 0").unwrap_err();
        assert!(err.message.contains("turn_seconds"));
    }

    #[test]
    fn test_style_override_drops_custom_messages() {
        let config = AppConfig::from_toml(
            r#"
            [messages]
            turn = "go {player}"
            win = "{player}!"
            draw = "meh"
            "#,
        )
        .expect("parses");
        assert_eq!(config.status_messages().turn(), "go {player}");

        let config = config
            .with_overrides(None, Some(MessageStyle::Taunt))
            .expect("valid");
        assert_eq!(config.status_messages(), StatusMessages::preset(MessageStyle::Taunt));
    }
}
