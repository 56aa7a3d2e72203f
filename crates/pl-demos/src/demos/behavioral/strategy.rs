//! Strategy: interchangeable load-balancing algorithms.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome};

pub const SERVER_COUNT: usize = 3;

const CONTROLS: &[Control] = &[
    Control::new("1", "RoundRobin"),
    Control::new("2", "Random"),
    Control::new("3", "LeastConn"),
    Control::new("s", "Send Traffic"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    RoundRobin,
    Random,
    LeastConn,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::RoundRobin,
        StrategyKind::Random,
        StrategyKind::LeastConn,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::RoundRobin => "RoundRobin",
            StrategyKind::Random => "Random",
            StrategyKind::LeastConn => "LeastConn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Server {
    pub id: usize,
    pub requests: u32,
}

impl Server {
    /// Load bar height in percent.
    pub fn load_percent(&self) -> u32 {
        (self.requests * 5).min(100)
    }
}

/// Routes requests to servers according to the selected strategy.
#[derive(Debug)]
pub struct Balancer {
    strategy: StrategyKind,
    servers: [Server; SERVER_COUNT],
    last: Option<usize>,
}

impl Default for Balancer {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::RoundRobin,
            servers: std::array::from_fn(|i| Server {
                id: i + 1,
                requests: 0,
            }),
            last: None,
        }
    }
}

impl Balancer {
    pub fn set_strategy(&mut self, strategy: StrategyKind) {
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    /// Pick a target, count the request and return the chosen index.
    pub fn route(&mut self, rng: &mut impl Rng) -> usize {
        let target = match self.strategy {
            StrategyKind::RoundRobin => {
                let next = self.last.map_or(0, |last| (last + 1) % SERVER_COUNT);
                self.last = Some(next);
                next
            }
            StrategyKind::Random => rng.gen_range(0..SERVER_COUNT),
            StrategyKind::LeastConn => self
                .servers
                .iter()
                .enumerate()
                .fold(0, |min, (i, s)| {
                    if s.requests < self.servers[min].requests {
                        i
                    } else {
                        min
                    }
                }),
        };
        self.servers[target].requests += 1;
        target
    }
}

#[derive(Debug)]
pub struct StrategyDemo {
    balancer: Balancer,
    rng: StdRng,
}

impl StrategyDemo {
    pub fn new(rng: StdRng) -> Self {
        Self {
            balancer: Balancer::default(),
            rng,
        }
    }

    pub fn send(&mut self) -> usize {
        self.balancer.route(&mut self.rng)
    }

    pub fn balancer(&self) -> &Balancer {
        &self.balancer
    }
}

impl Demo for StrategyDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('1') => self.balancer.set_strategy(StrategyKind::RoundRobin),
            DemoInput::Key('2') => self.balancer.set_strategy(StrategyKind::Random),
            DemoInput::Key('3') => self.balancer.set_strategy(StrategyKind::LeastConn),
            DemoInput::Key('s') => {
                self.send();
            }
            _ => return InputOutcome::Ignored,
        }
        InputOutcome::Consumed
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Switch algorithms to route traffic"
    }
}
