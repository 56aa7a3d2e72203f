//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const KEYS: &[(&str, &str)] = &[
    ("  ↑/↓     ", "Move the sidebar cursor"),
    ("  Enter   ", "Open pattern / fold category"),
    ("  Tab     ", "Toggle the sidebar drawer"),
    ("  Esc     ", "Close the drawer"),
    ("  PgUp/Dn ", "Scroll the pattern description"),
];

const ACTIONS: &[(&str, &str)] = &[
    ("  other   ", "Sent to the running demo"),
    ("  Q       ", "Quit"),
    ("  Ctrl-C  ", "Quit, even while editing"),
    ("  ?       ", "Toggle this help"),
];

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Center a box in the middle of the screen
    let popup_area = centered_rect(60, 70, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let mut help_text = vec![
        Line::from(Span::styled(
            "PATTERNLABS HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    help_text.extend(key_lines(KEYS));
    help_text.push(Line::raw(""));
    help_text.push(Line::from(Span::styled(
        "Actions",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    help_text.push(Line::raw(""));
    help_text.extend(key_lines(ACTIONS));
    help_text.push(Line::raw(""));
    help_text.push(Line::from(Span::styled(
        "While a demo field is being edited, keys go to the field.",
        Style::default().fg(Color::DarkGray),
    )));
    help_text.push(Line::raw(""));
    help_text.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

fn key_lines(keys: &'static [(&'static str, &'static str)]) -> impl Iterator<Item = Line<'static>> {
    keys.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(*key, Style::default().fg(Color::Yellow)),
            Span::raw(*action),
        ])
    })
}

/// Create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
