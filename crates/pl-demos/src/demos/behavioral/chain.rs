//! Chain of Responsibility: support tiers that solve or escalate a ticket.

use std::time::{Duration, Instant};

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome, TimerQueue};

const STEP_INTERVAL: Duration = Duration::from_millis(800);

const CONTROLS: &[Control] = &[
    Control::new("1", "Simple Query"),
    Control::new("2", "Complex Query"),
    Control::new("3", "Critical Bug"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ticket {
    SimpleQuery,
    ComplexQuery,
    CriticalBug,
}

impl Ticket {
    pub fn difficulty(self) -> u8 {
        match self {
            Ticket::SimpleQuery => 1,
            Ticket::ComplexQuery => 2,
            Ticket::CriticalBug => 3,
        }
    }
}

/// A link in the support chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Bot,
    Junior,
    Senior,
}

impl Handler {
    pub fn agent(self) -> &'static str {
        match self {
            Handler::Bot => "Bot",
            Handler::Junior => "Junior",
            Handler::Senior => "Senior",
        }
    }

    fn level(self) -> u8 {
        match self {
            Handler::Bot => 1,
            Handler::Junior => 2,
            Handler::Senior => 3,
        }
    }

    fn successor(self) -> Option<Handler> {
        match self {
            Handler::Bot => Some(Handler::Junior),
            Handler::Junior => Some(Handler::Senior),
            Handler::Senior => None,
        }
    }

    /// Walk the chain from this handler until someone solves the ticket.
    pub fn process(self, ticket: Ticket) -> Vec<ChainStep> {
        let mut steps = Vec::new();
        let mut current = Some(self);
        while let Some(handler) = current {
            let solved = ticket.difficulty() <= handler.level() || handler.successor().is_none();
            steps.push(ChainStep { handler, solved });
            if solved {
                break;
            }
            current = handler.successor();
        }
        steps
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainStep {
    pub handler: Handler,
    pub solved: bool,
}

impl ChainStep {
    pub fn title(&self) -> String {
        format!("{} Agent", self.handler.agent())
    }

    pub fn outcome(&self) -> &'static str {
        if self.solved {
            "Resolved Ticket ✅"
        } else {
            "Escalated ⬆️"
        }
    }
}

#[derive(Debug, Default)]
pub struct ChainDemo {
    log: Vec<ChainStep>,
    timers: TimerQueue<ChainStep>,
}

impl ChainDemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a ticket; steps of any previous ticket are dropped.
    pub fn submit(&mut self, ticket: Ticket, now: Instant) {
        self.timers.cancel_all();
        self.log.clear();
        for (i, step) in Handler::Bot.process(ticket).into_iter().enumerate() {
            self.timers.schedule(now, STEP_INTERVAL * i as u32, step);
        }
    }

    pub fn log(&self) -> &[ChainStep] {
        &self.log
    }
}

impl Demo for ChainDemo {
    fn handle(&mut self, input: DemoInput, now: Instant) -> InputOutcome {
        let ticket = match input {
            DemoInput::Key('1') => Ticket::SimpleQuery,
            DemoInput::Key('2') => Ticket::ComplexQuery,
            DemoInput::Key('3') => Ticket::CriticalBug,
            _ => return InputOutcome::Ignored,
        };
        self.submit(ticket, now);
        InputOutcome::Consumed
    }

    fn tick(&mut self, now: Instant) -> usize {
        let due = self.timers.drain_due(now);
        let fired = due.len();
        self.log.extend(due);
        fired
    }

    fn teardown(&mut self) -> usize {
        self.timers.cancel_all()
    }

    fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Send requests of varying difficulty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_chain_stops_at_capable_handler() {
        let steps = Handler::Bot.process(Ticket::SimpleQuery);
        assert_eq!(steps.len(), 1);
        assert!(steps[0].solved);

        let steps = Handler::Bot.process(Ticket::CriticalBug);
        let agents: Vec<_> = steps.iter().map(|s| s.handler).collect();
        assert_eq!(agents, vec![Handler::Bot, Handler::Junior, Handler::Senior]);
        assert_eq!(
            steps.iter().map(|s| s.solved).collect::<Vec<_>>(),
            vec![false, false, true]
        );
    }

    #[test]
    fn test_steps_revealed_every_800ms() {
        let t0 = Instant::now();
        let mut demo = ChainDemo::new();
        demo.handle(DemoInput::Key('3'), t0);

        demo.tick(t0);
        assert_eq!(demo.log().len(), 1);
        assert_eq!(demo.log()[0].title(), "Bot Agent");
        assert_eq!(demo.log()[0].outcome(), "Escalated ⬆️");

        demo.tick(t0 + ms(799));
        assert_eq!(demo.log().len(), 1);
        demo.tick(t0 + ms(1600));
        assert_eq!(demo.log().len(), 3);
        assert_eq!(demo.log()[2].outcome(), "Resolved Ticket ✅");
    }

    #[test]
    fn test_new_ticket_cancels_pending_steps() {
        let t0 = Instant::now();
        let mut demo = ChainDemo::new();
        demo.submit(Ticket::CriticalBug, t0);
        demo.tick(t0);

        demo.submit(Ticket::SimpleQuery, t0 + ms(100));
        assert!(demo.log().is_empty());
        assert_eq!(demo.pending_timers(), 1);

        demo.tick(t0 + ms(5000));
        assert_eq!(demo.log().len(), 1);
        assert_eq!(demo.log()[0].handler, Handler::Bot);
    }
}
