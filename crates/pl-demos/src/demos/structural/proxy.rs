//! Proxy: a rate-limiting firewall in front of the real service.

use std::time::{Duration, Instant};

use pl_catalog::PatternId;
use pl_telemetry::log_demo_event;

use crate::demos::Demo;
use crate::domain::{
    presets, Admission, BoundedLog, Control, DemoInput, InputOutcome, LogOrder, SlidingWindow,
    TimerId, TimerQueue,
};

const BLOCK_COOLDOWN: Duration = Duration::from_millis(500);
const LOG_CAPACITY: usize = 5;

const CONTROLS: &[Control] = &[Control::new("s", "Send Req")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Ok,
    Blocked,
}

impl RequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Ok => "200 OK",
            RequestStatus::Blocked => "429 Blocked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestRecord {
    pub seq: u64,
    pub status: RequestStatus,
}

#[derive(Debug)]
pub struct ProxyDemo {
    window: SlidingWindow,
    log: BoundedLog<RequestRecord>,
    next_seq: u64,
    cooldown: Option<TimerId>,
    timers: TimerQueue<()>,
}

impl Default for ProxyDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl ProxyDemo {
    pub fn new() -> Self {
        Self {
            window: presets::api_gateway(),
            log: BoundedLog::new(LOG_CAPACITY, LogOrder::NewestFirst),
            next_seq: 0,
            cooldown: None,
            timers: TimerQueue::new(),
        }
    }

    /// Route one request through the proxy.
    pub fn send(&mut self, now: Instant) -> RequestStatus {
        self.next_seq += 1;
        let status = match self.window.admit(now) {
            Admission::Accepted => RequestStatus::Ok,
            Admission::Rejected => {
                if let Some(previous) = self.cooldown.take() {
                    self.timers.cancel(previous);
                }
                self.cooldown = Some(self.timers.schedule(now, BLOCK_COOLDOWN, ()));
                log_demo_event!(
                    debug,
                    PatternId::Proxy,
                    "Request rejected by rate limiter",
                    seq = self.next_seq,
                    recent = self.window.recent(now)
                );
                RequestStatus::Blocked
            }
        };
        self.log.push(RequestRecord {
            seq: self.next_seq,
            status,
        });
        status
    }

    pub fn is_blocked(&self) -> bool {
        self.cooldown.is_some()
    }

    /// Request log, newest first.
    pub fn log(&self) -> impl Iterator<Item = &RequestRecord> + '_ {
        self.log.iter()
    }

    /// Badge text describing the configured limit.
    pub fn limit_label(&self) -> String {
        format!(
            "Limit: {}/{}s",
            self.window.limit(),
            self.window.window().as_secs()
        )
    }
}

impl Demo for ProxyDemo {
    fn handle(&mut self, input: DemoInput, now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('s') => {
                self.send(now);
                InputOutcome::Consumed
            }
            _ => InputOutcome::Ignored,
        }
    }

    fn tick(&mut self, now: Instant) -> usize {
        let fired = self.timers.drain_due(now).len();
        if fired > 0 {
            self.cooldown = None;
        }
        fired
    }

    fn teardown(&mut self) -> usize {
        self.cooldown = None;
        self.timers.cancel_all()
    }

    fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Try clicking fast (3x/2s) to trigger rate limit!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fourth_request_in_window_blocked() {
        let t0 = Instant::now();
        let mut demo = ProxyDemo::new();
        assert_eq!(demo.send(t0), RequestStatus::Ok);
        assert_eq!(demo.send(t0 + ms(100)), RequestStatus::Ok);
        assert_eq!(demo.send(t0 + ms(200)), RequestStatus::Ok);
        assert_eq!(demo.send(t0 + ms(300)), RequestStatus::Blocked);
        assert!(demo.is_blocked());

        let labels: Vec<_> = demo.log().map(|r| r.status.label()).collect();
        assert_eq!(labels, vec!["429 Blocked", "200 OK", "200 OK", "200 OK"]);
    }

    #[test]
    fn test_cooldown_clears_after_half_second() {
        let t0 = Instant::now();
        let mut demo = ProxyDemo::new();
        for i in 0..4 {
            demo.send(t0 + ms(i * 10));
        }
        demo.tick(t0 + ms(529));
        assert!(demo.is_blocked());
        demo.tick(t0 + ms(530));
        assert!(!demo.is_blocked());
    }

    #[test]
    fn test_new_block_restarts_cooldown() {
        let t0 = Instant::now();
        let mut demo = ProxyDemo::new();
        for i in 0..4 {
            demo.send(t0 + ms(i * 10));
        }
        demo.send(t0 + ms(400));
        assert_eq!(demo.pending_timers(), 1);
        demo.tick(t0 + ms(600));
        assert!(demo.is_blocked());
        demo.tick(t0 + ms(900));
        assert!(!demo.is_blocked());
    }

    #[test]
    fn test_log_keeps_five_newest() {
        let t0 = Instant::now();
        let mut demo = ProxyDemo::new();
        for i in 0..7 {
            demo.send(t0 + ms(i * 3000));
        }
        let seqs: Vec<_> = demo.log().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![7, 6, 5, 4, 3]);
        assert_eq!(demo.limit_label(), "Limit: 3/2s");
    }

    #[test]
    fn test_window_slides_open_again() {
        let t0 = Instant::now();
        let mut demo = ProxyDemo::new();
        for i in 0..3 {
            demo.send(t0 + ms(i * 100));
        }
        assert_eq!(demo.send(t0 + ms(2300)), RequestStatus::Ok);
    }
}
