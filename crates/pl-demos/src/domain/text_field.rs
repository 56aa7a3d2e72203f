//! Inline single-line text input.

use super::{DemoInput, InputOutcome};

/// A single-line text buffer with an explicit editing mode.
///
/// While editing, every printable key is captured. `Enter` and `Escape`
/// both leave editing mode and keep the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    value: String,
    editing: bool,
    max_len: usize,
}

impl TextField {
    pub fn new(initial: impl Into<String>, max_len: usize) -> Self {
        let mut value: String = initial.into();
        if let Some((idx, _)) = value.char_indices().nth(max_len) {
            value.truncate(idx);
        }
        Self {
            value,
            editing: false,
            max_len,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_editing(&mut self) {
        self.editing = true;
    }

    pub fn set(&mut self, value: &str) {
        self.value = value.chars().take(self.max_len).collect();
    }

    /// Apply an input while in editing mode.
    pub fn handle(&mut self, input: DemoInput) -> InputOutcome {
        if !self.editing {
            return InputOutcome::Ignored;
        }
        match input {
            DemoInput::Key(c) if !c.is_control() => {
                if self.value.chars().count() < self.max_len {
                    self.value.push(c);
                }
            }
            DemoInput::Key(_) => {}
            DemoInput::Backspace => {
                self.value.pop();
            }
            DemoInput::Enter | DemoInput::Escape => self.editing = false,
        }
        InputOutcome::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(field: &mut TextField, s: &str) {
        for c in s.chars() {
            field.handle(DemoInput::Key(c));
        }
    }

    #[test]
    fn test_ignores_keys_when_not_editing() {
        let mut field = TextField::new("abc", 10);
        assert_eq!(field.handle(DemoInput::Key('x')), InputOutcome::Ignored);
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_edit_session() {
        let mut field = TextField::new("", 10);
        field.begin_editing();
        type_str(&mut field, "Bobx");
        field.handle(DemoInput::Backspace);
        field.handle(DemoInput::Enter);

        assert_eq!(field.value(), "Bob");
        assert!(!field.is_editing());
    }

    #[test]
    fn test_max_len_is_enforced() {
        let mut field = TextField::new("abcdef", 4);
        assert_eq!(field.value(), "abcd");
        field.begin_editing();
        type_str(&mut field, "zz");
        assert_eq!(field.value(), "abcd");
    }

    #[test]
    fn test_escape_keeps_text() {
        let mut field = TextField::new("v1", 8);
        field.begin_editing();
        type_str(&mut field, "!");
        field.handle(DemoInput::Escape);
        assert_eq!(field.value(), "v1!");
    }
}
