//! # Sliding Window
//!
//! Request-rate window used by the proxy demo.
//!
//! ## Algorithm
//!
//! - Hits older than `window` are forgotten
//! - A request is rejected when `limit` hits are still inside the window
//! - Every request is recorded, rejected ones included, so a client that
//!   keeps hammering stays blocked

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Outcome of [`SlidingWindow::admit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted,
    Rejected,
}

/// Counts requests over a trailing time window.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    /// Length of the trailing window.
    window: Duration,
    /// Hits allowed inside the window.
    limit: usize,
    /// Timestamps of recorded hits, oldest first.
    hits: VecDeque<Instant>,
}

impl SlidingWindow {
    pub fn new(window: Duration, limit: usize) -> Self {
        Self {
            window,
            limit,
            hits: VecDeque::new(),
        }
    }

    /// Record a request at `now` and decide whether it may pass.
    pub fn admit(&mut self, now: Instant) -> Admission {
        self.prune(now);

        let admission = if self.hits.len() >= self.limit {
            Admission::Rejected
        } else {
            Admission::Accepted
        };
        self.hits.push_back(now);
        admission
    }

    /// Hits still inside the window at `now`.
    pub fn recent(&self, now: Instant) -> usize {
        self.hits
            .iter()
            .filter(|&&t| now.saturating_duration_since(t) < self.window)
            .count()
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn prune(&mut self, now: Instant) {
        while let Some(&oldest) = self.hits.front() {
            if now.saturating_duration_since(oldest) >= self.window {
                self.hits.pop_front();
            } else {
                break;
            }
        }
    }
}

/// Pre-configured windows.
pub mod presets {
    use super::SlidingWindow;
    use std::time::Duration;

    /// API gateway in the proxy demo (3 requests per 2 seconds).
    pub fn api_gateway() -> SlidingWindow {
        SlidingWindow::new(Duration::from_millis(2000), 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_allows_within_limit() {
        let t0 = Instant::now();
        let mut window = SlidingWindow::new(ms(2000), 3);

        for i in 0..3 {
            assert_eq!(window.admit(t0 + ms(i * 10)), Admission::Accepted);
        }
    }

    #[test]
    fn test_rejects_fourth_rapid_request() {
        let t0 = Instant::now();
        let mut window = presets::api_gateway();

        let outcomes: Vec<_> = (0..4).map(|i| window.admit(t0 + ms(i * 50))).collect();
        assert_eq!(
            outcomes,
            vec![
                Admission::Accepted,
                Admission::Accepted,
                Admission::Accepted,
                Admission::Rejected
            ]
        );
    }

    #[test]
    fn test_window_expiry_readmits() {
        let t0 = Instant::now();
        let mut window = SlidingWindow::new(ms(2000), 3);
        for _ in 0..3 {
            window.admit(t0);
        }

        assert_eq!(window.admit(t0 + ms(1999)), Admission::Rejected);
        // The rejected hit at 1999 still counts, the first three have expired.
        assert_eq!(window.admit(t0 + ms(2000)), Admission::Accepted);
        assert_eq!(window.recent(t0 + ms(2000)), 2);
    }

    #[test]
    fn test_rejected_hits_keep_client_blocked() {
        let t0 = Instant::now();
        let mut window = SlidingWindow::new(ms(1000), 1);
        assert_eq!(window.admit(t0), Admission::Accepted);
        assert_eq!(window.admit(t0 + ms(900)), Admission::Rejected);
        assert_eq!(window.admit(t0 + ms(1500)), Admission::Rejected);
        assert_eq!(window.admit(t0 + ms(2600)), Admission::Accepted);
    }
}
