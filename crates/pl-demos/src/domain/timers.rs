//! # Timer Queue
//!
//! Fixed-delay timers owned by a single demo.
//!
//! Time is injected: callers pass `now` to [`TimerQueue::schedule`] and
//! [`TimerQueue::drain_due`], so the queue never reads the clock itself and
//! tests can advance time instantly.
//!
//! Dropping the queue, or calling [`TimerQueue::cancel_all`], guarantees no
//! pending event is ever delivered to an unmounted demo.

use std::time::{Duration, Instant};

/// Handle of a scheduled timer, unique within its queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<E> {
    id: TimerId,
    due: Instant,
    event: E,
}

/// A queue of events to deliver once their deadline has passed.
#[derive(Debug)]
pub struct TimerQueue<E> {
    pending: Vec<Pending<E>>,
    next_id: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `event` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: now + delay,
            event,
        });
        id
    }

    /// Cancel one timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    /// Cancel every pending timer, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// Remove and return every event due at `now`, earliest deadline first.
    ///
    /// Timers sharing a deadline fire in scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<E> {
        let (mut ready, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.due <= now);
        self.pending = waiting;

        ready.sort_by_key(|p| (p.due, p.id));
        ready.into_iter().map(|p| p.event).collect()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    pub fn contains(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_nothing_fires_before_deadline() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(t0, ms(500), "a");

        assert!(timers.drain_due(t0 + ms(499)).is_empty());
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.drain_due(t0 + ms(500)), vec!["a"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_drain_orders_by_deadline_then_insertion() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(t0, ms(300), "late");
        timers.schedule(t0, ms(100), "first");
        timers.schedule(t0, ms(100), "second");

        assert_eq!(timers.drain_due(t0 + ms(1000)), vec!["first", "second", "late"]);
    }

    #[test]
    fn test_cancel_single_timer() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        let keep = timers.schedule(t0, ms(10), 1);
        let dropped = timers.schedule(t0, ms(10), 2);

        assert!(timers.cancel(dropped));
        assert!(!timers.cancel(dropped));
        assert!(timers.contains(keep));
        assert_eq!(timers.drain_due(t0 + ms(10)), vec![1]);
    }

    #[test]
    fn test_cancel_all_reports_count() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        for i in 0..4 {
            timers.schedule(t0, ms(i * 100), i);
        }

        assert_eq!(timers.cancel_all(), 4);
        assert!(timers.drain_due(t0 + ms(10_000)).is_empty());
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn test_next_deadline_is_earliest() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(t0, ms(800), ());
        timers.schedule(t0, ms(200), ());

        assert_eq!(timers.next_deadline(), Some(t0 + ms(200)));
    }
}
