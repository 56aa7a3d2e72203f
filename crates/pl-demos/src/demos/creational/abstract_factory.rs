//! Abstract Factory: a theme factory yields a matching widget family.

use std::time::Instant;

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome};

const CONTROLS: &[Control] = &[
    Control::new("d", "Dark Theme Factory"),
    Control::new("l", "Light Theme Factory"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub label: &'static str,
    pub theme: Theme,
}

/// Creates every product of one family.
pub trait WidgetFactory {
    fn create_button(&self) -> Button;
    fn create_checkbox(&self) -> Checkbox;
}

struct DarkThemeFactory;
struct LightThemeFactory;

impl WidgetFactory for DarkThemeFactory {
    fn create_button(&self) -> Button {
        Button {
            label: "Dark Button",
            theme: Theme::Dark,
        }
    }

    fn create_checkbox(&self) -> Checkbox {
        Checkbox {
            label: "Checkbox Style",
            theme: Theme::Dark,
        }
    }
}

impl WidgetFactory for LightThemeFactory {
    fn create_button(&self) -> Button {
        Button {
            label: "Light Button",
            theme: Theme::Light,
        }
    }

    fn create_checkbox(&self) -> Checkbox {
        Checkbox {
            label: "Checkbox Style",
            theme: Theme::Light,
        }
    }
}

impl Theme {
    pub fn factory(&self) -> &'static dyn WidgetFactory {
        match self {
            Theme::Dark => &DarkThemeFactory,
            Theme::Light => &LightThemeFactory,
        }
    }
}

#[derive(Debug)]
pub struct AbstractFactoryDemo {
    theme: Theme,
    button: Button,
    checkbox: Checkbox,
}

impl Default for AbstractFactoryDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl AbstractFactoryDemo {
    pub fn new() -> Self {
        let factory = Theme::Dark.factory();
        Self {
            theme: Theme::Dark,
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
        }
    }

    /// Swap the factory and rebuild the whole window from it.
    pub fn set_theme(&mut self, theme: Theme) {
        let factory = theme.factory();
        self.theme = theme;
        self.button = factory.create_button();
        self.checkbox = factory.create_checkbox();
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn checkbox(&self) -> &Checkbox {
        &self.checkbox
    }
}

impl Demo for AbstractFactoryDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('d') => self.set_theme(Theme::Dark),
            DemoInput::Key('l') => self.set_theme(Theme::Light),
            _ => return InputOutcome::Ignored,
        }
        InputOutcome::Consumed
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Switch Theme Factory to change UI families"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_dark() {
        let demo = AbstractFactoryDemo::new();
        assert_eq!(demo.theme(), Theme::Dark);
        assert_eq!(demo.button().label, "Dark Button");
    }

    #[test]
    fn test_family_stays_consistent() {
        let mut demo = AbstractFactoryDemo::new();
        demo.handle(DemoInput::Key('l'), Instant::now());

        assert_eq!(demo.button().label, "Light Button");
        assert_eq!(demo.button().theme, Theme::Light);
        assert_eq!(demo.checkbox().theme, Theme::Light);
    }
}
