//! Engine settings.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::status::StatusMessages;
use crate::timer::DEFAULT_TURN_SECONDS;

/// Tunables for a [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Seconds each player gets per turn.
    turn_seconds: u32,
    /// Status line templates.
    messages: StatusMessages,
}

impl EngineSettings {
    /// Creates settings. A zero turn length is raised to one second.
    #[instrument(skip(messages))]
    pub fn new(turn_seconds: u32, messages: StatusMessages) -> Self {
        Self {
            turn_seconds: turn_seconds.max(1),
            messages,
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_SECONDS, StatusMessages::default())
    }
}
