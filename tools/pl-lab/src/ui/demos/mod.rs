//! Per-pattern canvas renderers.
//!
//! Each renderer reads the demo's public state and draws it; none of them
//! mutate the demo.

mod behavioral;
mod creational;
mod structural;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use pl_demos::DemoState;

/// Dispatch to the renderer of the mounted demo.
pub fn render(frame: &mut Frame, area: Rect, demo: &DemoState) {
    match demo {
        DemoState::Singleton(d) => creational::singleton(frame, area, d),
        DemoState::Factory(d) => creational::factory(frame, area, d),
        DemoState::AbstractFactory(d) => creational::abstract_factory(frame, area, d),
        DemoState::Builder(d) => creational::builder(frame, area, d),
        DemoState::Prototype(d) => creational::prototype(frame, area, d),
        DemoState::Adapter(d) => structural::adapter(frame, area, d),
        DemoState::Bridge(d) => structural::bridge(frame, area, d),
        DemoState::Composite(d) => structural::composite(frame, area, d),
        DemoState::Decorator(d) => structural::decorator(frame, area, d),
        DemoState::Facade(d) => structural::facade(frame, area, d),
        DemoState::Flyweight(d) => structural::flyweight(frame, area, d),
        DemoState::Proxy(d) => structural::proxy(frame, area, d),
        DemoState::ChainOfResponsibility(d) => behavioral::chain(frame, area, d),
        DemoState::Command(d) => behavioral::command(frame, area, d),
        DemoState::Iterator(d) => behavioral::iterator(frame, area, d),
        DemoState::Mediator(d) => behavioral::mediator(frame, area, d),
        DemoState::Memento(d) => behavioral::memento(frame, area, d),
        DemoState::Observer(d) => behavioral::observer(frame, area, d),
        DemoState::State(d) => behavioral::state(frame, area, d),
        DemoState::Strategy(d) => behavioral::strategy(frame, area, d),
        DemoState::TemplateMethod(d) => behavioral::template_method(frame, area, d),
        DemoState::Visitor(d) => behavioral::visitor(frame, area, d),
    }
}

fn draw_lines(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// The last `budget` items, for unbounded lists drawn in a fixed area.
fn tail_fit<T>(items: &[T], budget: usize) -> &[T] {
    &items[items.len().saturating_sub(budget)..]
}

fn label() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

fn muted() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

fn ok() -> Style {
    Style::default().fg(Color::Green)
}

fn bad() -> Style {
    Style::default().fg(Color::Red)
}

fn highlight() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn selected(on: bool) -> Style {
    if on {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_fit_keeps_latest() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(tail_fit(&items, 2), &[4, 5]);
        assert_eq!(tail_fit(&items, 10), &items);
        assert!(tail_fit(&items, 0).is_empty());
    }
}
