//! Deadline-based debounce.

use std::time::{Duration, Instant};

/// Default quiet period before a debounced recomputation fires.
///
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Tracks a single pending recomputation.
///
/// Every call to [`Debouncer::schedule`] pushes the deadline out to
/// `now + quiet_period`, replacing whatever was pending. The owner polls
/// with [`Debouncer::fire_if_due`] and gets `true` exactly once per quiet
/// period that elapses.
///
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Debouncer {
            quiet_period,
            deadline: None,
        }
    }

    /// Restart the quiet period from `now`.
    ///
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet_period);
    }

    /// Drop any pending recomputation.
    ///
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the pending deadline if it has passed.
    ///
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(DEFAULT_QUIET_PERIOD)
    }
}
