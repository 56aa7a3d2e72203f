//! Main layout orchestration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  PatternLabs  Structural             [Tab]Menu [?]Help [Q]uit   │
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  PATTERNS              │  PATTERN METADATA                      │
//! │  ...                   ├────────────────────────────────────────┤
//! │                        │  simulation://proxy.sim                │
//! └────────────────────────┴────────────────────────────────────────┘
//! │  [s] Send Req                                                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Below [`NARROW_WIDTH`] columns the sidebar becomes a drawer that is only
//! drawn, over the content, while open.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::domain::{App, AppState};

use super::{left_panel, right_panel, widgets};

/// Terminal width below which the sidebar turns into a drawer.
pub const NARROW_WIDTH: u16 = 100;

/// Width of the sidebar column.
pub const SIDEBAR_WIDTH: u16 = 30;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Main vertical layout: header, body, footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Footer (demo controls)
        ])
        .split(size);

    render_header(frame, main_chunks[0], app);
    render_body(frame, main_chunks[1], app);
    render_footer(frame, main_chunks[2], app);

    if app.state == AppState::Help {
        widgets::render_help_overlay(frame);
    }
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let category = app.active().category();
    let (r, g, b) = category.accent().rgb();

    let title = vec![
        Span::styled(
            " PatternLabs ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", category.name()),
            Style::default().fg(Color::Rgb(r, g, b)),
        ),
    ];

    let hints = vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw("Menu "),
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw("Help "),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::raw("uit "),
    ];

    // Calculate spacing
    let title_len: usize = title.iter().map(|s| s.content.chars().count()).sum();
    let hints_len: usize = hints.iter().map(|s| s.content.chars().count()).sum();
    let padding = area
        .width
        .saturating_sub(2)
        .saturating_sub((title_len + hints_len) as u16);

    let mut spans = title;
    spans.push(Span::raw(" ".repeat(padding as usize)));
    spans.extend(hints);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Render the main body (sidebar + content).
fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    if area.width >= NARROW_WIDTH {
        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(SIDEBAR_WIDTH), // Sidebar
                Constraint::Min(40),               // Metadata + canvas
            ])
            .split(area);

        left_panel::render(frame, body_chunks[0], app);
        right_panel::render(frame, body_chunks[1], app);
        return;
    }

    right_panel::render(frame, area, app);

    if app.navigation().is_sidebar_open() {
        let drawer = Rect {
            width: SIDEBAR_WIDTH.min(area.width),
            ..area
        };
        frame.render_widget(Clear, drawer);
        left_panel::render(frame, drawer, app);
    }
}

/// Render the footer with the active demo's controls.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut keybinds = Vec::new();
    for control in app.demo().controls() {
        keybinds.push(Span::styled(
            format!("[{}]", control.key),
            Style::default().fg(Color::Yellow),
        ));
        keybinds.push(Span::raw(format!(" {}  ", control.label)));
    }
    if app.demo().is_editing() {
        keybinds.push(Span::styled(
            "[Enter/Esc]",
            Style::default().fg(Color::Yellow),
        ));
        keybinds.push(Span::raw(" Done editing  "));
    }

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
