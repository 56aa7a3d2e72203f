//! Input delivered to a demo and its key legend.

/// A key press routed to the active demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoInput {
    Key(char),
    Backspace,
    Enter,
    Escape,
}

/// Whether the demo reacted to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The input changed (or deliberately guarded) demo state.
    Consumed,
    /// The demo has no binding for this input.
    Ignored,
}

impl InputOutcome {
    pub fn is_consumed(&self) -> bool {
        matches!(self, InputOutcome::Consumed)
    }
}

/// One entry of a demo's key legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    /// Key label as shown in the footer (`1`, `s`, `1-9`).
    pub key: &'static str,
    pub label: &'static str,
}

impl Control {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}
