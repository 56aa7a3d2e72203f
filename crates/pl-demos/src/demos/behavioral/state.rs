//! State: a TCP connection whose allowed events depend on its state.

use std::fmt;
use std::time::{Duration, Instant};

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome, TimerQueue};

const HANDSHAKE_TIME: Duration = Duration::from_millis(1500);

const CONTROLS: &[Control] = &[
    Control::new("c", "1. Connect (SYN)"),
    Control::new("x", "2. Close (FIN)"),
    Control::new("r", "Reset"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TcpState {
    Closed,
    SynSent,
    Established,
    FinWait,
}

impl TcpState {
    pub fn label(self) -> &'static str {
        match self {
            TcpState::Closed => "CLOSED",
            TcpState::SynSent => "SYN_SENT",
            TcpState::Established => "ESTABLISHED",
            TcpState::FinWait => "FIN_WAIT",
        }
    }

    /// Fill ratio of the link bar.
    pub fn progress(self) -> f64 {
        match self {
            TcpState::Closed => 0.0,
            TcpState::SynSent => 0.5,
            TcpState::Established | TcpState::FinWait => 1.0,
        }
    }
}

impl fmt::Display for TcpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Context object; transitions are only accepted from the right state.
#[derive(Debug)]
pub struct Connection {
    state: TcpState,
    handshake: TimerQueue<()>,
}

impl Default for Connection {
    fn default() -> Self {
        Self {
            state: TcpState::Closed,
            handshake: TimerQueue::new(),
        }
    }
}

impl Connection {
    pub fn state(&self) -> TcpState {
        self.state
    }

    pub fn connect(&mut self, now: Instant) -> bool {
        if self.state != TcpState::Closed {
            return false;
        }
        self.state = TcpState::SynSent;
        self.handshake.schedule(now, HANDSHAKE_TIME, ());
        true
    }

    pub fn close(&mut self) -> bool {
        if self.state != TcpState::Established {
            return false;
        }
        self.state = TcpState::FinWait;
        true
    }

    pub fn reset(&mut self) {
        self.handshake.cancel_all();
        self.state = TcpState::Closed;
    }

    fn poll(&mut self, now: Instant) -> usize {
        let fired = self.handshake.drain_due(now).len();
        if fired > 0 && self.state == TcpState::SynSent {
            self.state = TcpState::Established;
        }
        fired
    }
}

#[derive(Debug, Default)]
pub struct StateDemo {
    connection: Connection,
}

impl StateDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TcpState {
        self.connection.state()
    }
}

impl Demo for StateDemo {
    fn handle(&mut self, input: DemoInput, now: Instant) -> InputOutcome {
        let accepted = match input {
            DemoInput::Key('c') => self.connection.connect(now),
            DemoInput::Key('x') => self.connection.close(),
            DemoInput::Key('r') => {
                self.connection.reset();
                true
            }
            _ => false,
        };
        if accepted {
            InputOutcome::Consumed
        } else {
            InputOutcome::Ignored
        }
    }

    fn tick(&mut self, now: Instant) -> usize {
        self.connection.poll(now)
    }

    fn teardown(&mut self) -> usize {
        self.connection.handshake.cancel_all()
    }

    fn pending_timers(&self) -> usize {
        self.connection.handshake.len()
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Trigger events to transition state"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_full_lifecycle() {
        let t0 = Instant::now();
        let mut demo = StateDemo::new();
        assert_eq!(demo.handle(DemoInput::Key('x'), t0), InputOutcome::Ignored);

        demo.handle(DemoInput::Key('c'), t0);
        assert_eq!(demo.state(), TcpState::SynSent);
        assert_eq!(demo.handle(DemoInput::Key('c'), t0), InputOutcome::Ignored);

        demo.tick(t0 + ms(1499));
        assert_eq!(demo.state(), TcpState::SynSent);
        demo.tick(t0 + ms(1500));
        assert_eq!(demo.state(), TcpState::Established);
        assert_eq!(demo.state().progress(), 1.0);

        demo.handle(DemoInput::Key('x'), t0 + ms(2000));
        assert_eq!(demo.state().label(), "FIN_WAIT");
    }

    #[test]
    fn test_reset_cancels_handshake() {
        let t0 = Instant::now();
        let mut demo = StateDemo::new();
        demo.handle(DemoInput::Key('c'), t0);
        demo.handle(DemoInput::Key('r'), t0 + ms(100));
        assert_eq!(demo.pending_timers(), 0);

        demo.tick(t0 + ms(5000));
        assert_eq!(demo.state(), TcpState::Closed);
    }
}
