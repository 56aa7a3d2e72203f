//! Singleton: one shared connection pool, created lazily on first request.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;

use crate::demos::Demo;
use crate::domain::{BoundedLog, Control, DemoInput, InputOutcome, LogOrder};

const REQUEST_LOG_CAPACITY: usize = 4;

const CONTROLS: &[Control] = &[
    Control::new("1-3", "Request from client"),
    Control::new("r", "Reset memory"),
];

/// The single shared instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPool {
    id: String,
}

impl ConnectionPool {
    fn open(rng: &mut StdRng) -> Self {
        Self {
            id: format!("0x{:06X}", rng.gen_range(0..0x100_0000u32)),
        }
    }

    /// Address-like identifier, `0x` followed by six hex digits.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// One access-log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolRequest {
    pub seq: u64,
    pub client: u8,
    pub pool_id: String,
    /// `true` if this request created the instance (INIT), `false` on REUSE.
    pub created: bool,
}

#[derive(Debug)]
pub struct SingletonDemo {
    instance: Option<ConnectionPool>,
    requests: BoundedLog<PoolRequest>,
    next_seq: u64,
    rng: StdRng,
}

impl SingletonDemo {
    pub fn new(rng: StdRng) -> Self {
        Self {
            instance: None,
            requests: BoundedLog::new(REQUEST_LOG_CAPACITY, LogOrder::NewestFirst),
            next_seq: 1,
            rng,
        }
    }

    /// Return the shared pool, creating it on the first call.
    pub fn get_instance(&mut self, client: u8) -> &ConnectionPool {
        let created = self.instance.is_none();
        let rng = &mut self.rng;
        let pool = self.instance.get_or_insert_with(|| ConnectionPool::open(rng));

        self.requests.push(PoolRequest {
            seq: self.next_seq,
            client,
            pool_id: pool.id.clone(),
            created,
        });
        self.next_seq += 1;
        pool
    }

    /// Drop the instance and clear the access log.
    pub fn reset(&mut self) {
        self.instance = None;
        self.requests.clear();
    }

    pub fn instance(&self) -> Option<&ConnectionPool> {
        self.instance.as_ref()
    }

    /// Access log, newest first.
    pub fn requests(&self) -> &BoundedLog<PoolRequest> {
        &self.requests
    }
}

impl Demo for SingletonDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key(c @ '1'..='3') => {
                self.get_instance(c as u8 - b'0');
            }
            DemoInput::Key('r') => self.reset(),
            _ => return InputOutcome::Ignored,
        }
        InputOutcome::Consumed
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Click different Clients to request Instance"
    }
}
