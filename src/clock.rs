//! Countdown ticks driven by a tokio task.

use std::time::Duration;

use timed_tictactoe_engine::{TimerLease, TurnClock};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tracing::{debug, instrument, trace};

use crate::event::AppEvent;

/// Aborts the tick task when dropped.
#[derive(Debug)]
pub struct TickGuard {
    lease: TimerLease,
    task: JoinHandle<()>,
}

impl TickGuard {
    /// Lease the guarded task ticks for.
    pub fn lease(&self) -> TimerLease {
        self.lease
    }
}

impl Drop for TickGuard {
    fn drop(&mut self) {
        debug!(lease = %self.lease, "Cancelling tick task");
        self.task.abort();
    }
}

/// [`TurnClock`] that sends [`AppEvent::Tick`] into the host's event channel.
///
/// At most one tick task exists at a time; starting a new lease drops the
/// previous [`TickGuard`], aborting its task.
#[derive(Debug)]
pub struct TokioClock {
    tx: UnboundedSender<AppEvent>,
    period: Duration,
    guard: Option<TickGuard>,
}

impl TokioClock {
    /// Creates an idle clock. Must be started from within a tokio runtime.
    pub fn new(tx: UnboundedSender<AppEvent>, period: Duration) -> Self {
        Self {
            tx,
            period,
            guard: None,
        }
    }

    /// Lease currently ticking, if any.
    pub fn active(&self) -> Option<TimerLease> {
        self.guard.as_ref().map(TickGuard::lease)
    }
}

impl TurnClock for TokioClock {
    #[instrument(skip(self), fields(%lease, period = ?self.period))]
    fn start(&mut self, lease: TimerLease) {
        // Drop the old guard first so its task is aborted before the new one runs.
        self.guard = None;

        let tx = self.tx.clone();
        let period = self.period;
        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                trace!(%lease, "Tick");
                if tx.send(AppEvent::Tick(lease)).is_err() {
                    debug!("Event channel closed, stopping tick task");
                    break;
                }
            }
        });
        self.guard = Some(TickGuard { lease, task });
    }

    #[instrument(skip(self))]
    fn stop(&mut self) {
        self.guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timed_tictactoe_engine::TurnTimer;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    fn leases() -> (TimerLease, TimerLease) {
        let mut timer = TurnTimer::default();
        (timer.start(), timer.start())
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut clock = TokioClock::new(tx, Duration::from_secs(1));
        let (lease, _) = leases();
        clock.start(lease);

        let start = Instant::now();
        assert_eq!(rx.recv().await, Some(AppEvent::Tick(lease)));
        assert_eq!(rx.recv().await, Some(AppEvent::Tick(lease)));
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_previous_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut clock = TokioClock::new(tx, Duration::from_secs(1));
        let (first, second) = leases();
        clock.start(first);
        clock.start(second);
        assert_eq!(clock.active(), Some(second));

        for _ in 0..3 {
            assert_eq!(rx.recv().await, Some(AppEvent::Tick(second)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_silences_clock() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut clock = TokioClock::new(tx, Duration::from_secs(1));
        let (lease, _) = leases();
        clock.start(lease);
        clock.stop();
        assert_eq!(clock.active(), None);

        let waited = timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(waited.is_err(), "no tick expected after stop");
    }
}
