//! Mediator: users talk through a hub, never to each other.

use std::time::Instant;

use crate::demos::Demo;
use crate::domain::{BoundedLog, Control, DemoInput, InputOutcome, LogOrder};

const HISTORY: usize = 4;

const CONTROLS: &[Control] = &[
    Control::new("a", "Alice: Hello!"),
    Control::new("b", "Bob: Hi!"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub user: &'static str,
    pub text: &'static str,
}

/// The mediator. Keeps the most recent messages in arrival order.
#[derive(Debug)]
pub struct ChatHub {
    messages: BoundedLog<ChatMessage>,
}

impl Default for ChatHub {
    fn default() -> Self {
        Self {
            messages: BoundedLog::new(HISTORY, LogOrder::OldestFirst),
        }
    }
}

impl ChatHub {
    pub fn route(&mut self, user: &'static str, text: &'static str) {
        self.messages.push(ChatMessage { user, text });
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> + '_ {
        self.messages.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct MediatorDemo {
    hub: ChatHub,
}

impl MediatorDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hub(&self) -> &ChatHub {
        &self.hub
    }
}

impl Demo for MediatorDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('a') => self.hub.route("Alice", "Hello!"),
            DemoInput::Key('b') => self.hub.route("Bob", "Hi!"),
            _ => return InputOutcome::Ignored,
        }
        InputOutcome::Consumed
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Users talk to Hub, not each other"
    }
}
