//! Memento: editor snapshots kept by a caretaker.

use std::time::Instant;

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome, TextField};

const EDITOR_MAX_LEN: usize = 32;
const RESTORE_MAX_DIGITS: usize = 4;

const CONTROLS: &[Control] = &[
    Control::new("e", "Edit"),
    Control::new("s", "Save Snapshot"),
    Control::new("1-9", "Restore"),
    Control::new("r", "Restore #"),
];

/// Opaque saved editor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    text: String,
}

impl Snapshot {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Holds snapshots without looking inside them.
#[derive(Debug, Default)]
pub struct Caretaker {
    history: Vec<Snapshot>,
}

impl Caretaker {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.history.push(snapshot);
    }

    /// 1-based lookup, matching the labels shown in the history list.
    pub fn get(&self, number: usize) -> Option<&Snapshot> {
        number.checked_sub(1).and_then(|i| self.history.get(i))
    }

    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.history
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, s.text))
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[derive(Debug)]
pub struct MementoDemo {
    editor: TextField,
    /// Snapshot number typed after `r`, for histories past nine entries.
    restore_number: TextField,
    caretaker: Caretaker,
}

impl Default for MementoDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl MementoDemo {
    pub fn new() -> Self {
        Self {
            editor: TextField::new("Version 1", EDITOR_MAX_LEN),
            restore_number: TextField::new("", RESTORE_MAX_DIGITS),
            caretaker: Caretaker::default(),
        }
    }

    pub fn save(&mut self) {
        self.caretaker.push(Snapshot {
            text: self.editor.value().to_string(),
        });
    }

    pub fn restore(&mut self, number: usize) -> bool {
        match self.caretaker.get(number) {
            Some(snapshot) => {
                let text = snapshot.text.clone();
                self.editor.set(&text);
                true
            }
            None => false,
        }
    }

    pub fn text(&self) -> &str {
        self.editor.value()
    }

    pub fn caretaker(&self) -> &Caretaker {
        &self.caretaker
    }

    /// Digits typed so far while choosing a snapshot to restore.
    pub fn restore_prompt(&self) -> Option<&str> {
        self.restore_number
            .is_editing()
            .then(|| self.restore_number.value())
    }

    fn handle_restore_number(&mut self, input: DemoInput) -> InputOutcome {
        match input {
            DemoInput::Key(c) if c.is_ascii_digit() => {
                self.restore_number.handle(input);
            }
            DemoInput::Key(_) => {}
            DemoInput::Backspace => {
                self.restore_number.handle(input);
            }
            DemoInput::Enter => {
                self.restore_number.handle(input);
                let number = self.restore_number.value().parse().unwrap_or(0);
                self.restore_number.set("");
                self.restore(number);
            }
            DemoInput::Escape => {
                self.restore_number.handle(input);
                self.restore_number.set("");
            }
        }
        InputOutcome::Consumed
    }
}

impl Demo for MementoDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        if self.editor.is_editing() {
            return self.editor.handle(input);
        }
        if self.restore_number.is_editing() {
            return self.handle_restore_number(input);
        }
        match input {
            DemoInput::Key('e') => self.editor.begin_editing(),
            DemoInput::Key('s') => self.save(),
            DemoInput::Key('r') => self.restore_number.begin_editing(),
            DemoInput::Key(c @ '1'..='9') => {
                let number = c.to_digit(10).map_or(0, |d| d as usize);
                if !self.restore(number) {
                    return InputOutcome::Ignored;
                }
            }
            _ => return InputOutcome::Ignored,
        }
        InputOutcome::Consumed
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Save state snapshots and restore them"
    }

    fn is_editing(&self) -> bool {
        self.editor.is_editing() || self.restore_number.is_editing()
    }
}
