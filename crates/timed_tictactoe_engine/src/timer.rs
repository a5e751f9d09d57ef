//! Turn countdown and the clock seam that drives it.
//!
//! Every started countdown is identified by a [`TimerLease`]. The engine
//! only honours ticks that carry the current lease, so a tick scheduled for
//! an earlier turn, or for a game that has since ended, is dropped even if
//! the clock already queued it.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Seconds per turn when nothing else is configured.
pub const DEFAULT_TURN_SECONDS: u32 = 10;

/// Token identifying one started countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("lease#{_0}")]
pub struct TimerLease(u64);

impl TimerLease {
    /// Generation number of this lease.
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Source of periodic ticks for the turn countdown.
///
/// Implementations deliver ticks back to the engine by calling
/// [`GameEngine::tick`](crate::GameEngine::tick) with the lease passed to
/// the most recent [`start`](TurnClock::start).
pub trait TurnClock {
    /// Starts ticking for `lease`, replacing any previous schedule.
    fn start(&mut self, lease: TimerLease);

    /// Stops ticking. No tick for an earlier lease may be delivered afterwards.
    fn stop(&mut self);
}

/// Countdown state owned by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnTimer {
    duration: u32,
    remaining: u32,
    generation: u64,
    lease: Option<TimerLease>,
}

impl TurnTimer {
    /// Creates a stopped timer for turns of `duration` seconds.
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            generation: 0,
            lease: None,
        }
    }

    /// Seconds per turn.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Seconds left in the current turn.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Lease of the running countdown, if any.
    pub fn lease(&self) -> Option<TimerLease> {
        self.lease
    }

    /// Whether a countdown is running.
    pub fn is_running(&self) -> bool {
        self.lease.is_some()
    }

    /// Refills the countdown without changing the lease.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
    }

    /// Refills the countdown and issues a fresh lease.
    #[instrument(level = "trace", skip(self))]
    pub fn start(&mut self) -> TimerLease {
        self.generation += 1;
        self.remaining = self.duration;
        let lease = TimerLease(self.generation);
        self.lease = Some(lease);
        lease
    }

    /// Invalidates the current lease.
    pub fn stop(&mut self) {
        self.lease = None;
    }

    /// Counts down one second for `lease`.
    ///
    /// Returns the seconds left, or `None` when `lease` is stale.
    pub fn tick(&mut self, lease: TimerLease) -> Option<u32> {
        if self.lease != Some(lease) {
            debug!(%lease, current = ?self.lease, "Dropping stale tick");
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        trace!(remaining = self.remaining, "Tick");
        Some(self.remaining)
    }
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_SECONDS)
    }
}

/// Clock driven by hand: records what the engine asked for.
///
/// The host delivers ticks itself, typically with
/// `engine.tick(engine.clock().active().unwrap())`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualClock {
    active: Option<TimerLease>,
    starts: Vec<TimerLease>,
    stops: usize,
}

impl ManualClock {
    /// Creates an idle clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lease that is currently scheduled.
    pub fn active(&self) -> Option<TimerLease> {
        self.active
    }

    /// Every lease started so far, oldest first.
    pub fn starts(&self) -> &[TimerLease] {
        &self.starts
    }

    /// How many times the clock was stopped.
    pub fn stops(&self) -> usize {
        self.stops
    }
}

impl TurnClock for ManualClock {
    fn start(&mut self, lease: TimerLease) {
        self.active = Some(lease);
        self.starts.push(lease);
    }

    fn stop(&mut self) {
        self.active = None;
        self.stops += 1;
    }
}
