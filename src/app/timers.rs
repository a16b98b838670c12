//! One-shot timers on top of the host's `set_timeout`.
//!
//! The host can arm a timer but not cancel one, and its `Timer` event does
//! not say which timer fired. [`TimerQueue`] fills both gaps: it hands out
//! handles in scheduling order, remembers cancellations, and maps each host
//! firing back to the oldest armed handle. All debounce timers use the same
//! delay, so the host fires them in the order they were armed.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::time::Duration;

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Arms and cancels one-shot timers.
pub trait Scheduler {
    /// Arms a timer that fires once after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Cancels an armed timer. Cancelling a fired or unknown handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Host-backed [`Scheduler`].
///
/// Scheduled delays accumulate in an outbox until [`TimerQueue::drain_requests`]
/// turns them into host calls.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    armed: VecDeque<TimerHandle>,
    cancelled: HashSet<TimerHandle>,
    outbox: Vec<Duration>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts for one host timer firing.
    ///
    /// Returns the handle that fired, or `None` when it had been cancelled
    /// (or nothing was armed at all).
    pub fn fire_next(&mut self) -> Option<TimerHandle> {
        let handle = self.armed.pop_front()?;
        if self.cancelled.remove(&handle) {
            tracing::trace!(%handle, "cancelled timer elapsed");
            return None;
        }
        Some(handle)
    }

    /// Delays scheduled since the last drain, oldest first.
    pub fn drain_requests(&mut self) -> Vec<Duration> {
        std::mem::take(&mut self.outbox)
    }

    /// Timers armed with the host and not yet fired, cancelled ones included.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.armed.len()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.armed.push_back(handle);
        self.outbox.push(delay);
        tracing::trace!(%handle, delay_ms = delay.as_millis(), "timer scheduled");
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.armed.contains(&handle) {
            self.cancelled.insert(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(600);

    #[test]
    fn firings_map_to_handles_in_order() {
        let mut queue = TimerQueue::new();
        let first = queue.schedule(QUIET);
        let second = queue.schedule(QUIET);

        assert_eq!(queue.drain_requests(), vec![QUIET, QUIET]);
        assert!(queue.drain_requests().is_empty());
        assert_eq!(queue.fire_next(), Some(first));
        assert_eq!(queue.fire_next(), Some(second));
        assert_eq!(queue.fire_next(), None);
    }

    #[test]
    fn cancelled_timer_fires_as_none() {
        let mut queue = TimerQueue::new();
        let stale = queue.schedule(QUIET);
        queue.cancel(stale);
        let live = queue.schedule(QUIET);

        assert_eq!(queue.fire_next(), None);
        assert_eq!(queue.fire_next(), Some(live));
        assert_eq!(queue.in_flight(), 0);
    }

    #[test]
    fn cancelling_a_fired_handle_is_ignored() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(QUIET);
        assert_eq!(queue.fire_next(), Some(handle));
        queue.cancel(handle);
        let next = queue.schedule(QUIET);
        assert_eq!(queue.fire_next(), Some(next));
    }
}
