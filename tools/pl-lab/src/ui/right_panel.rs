//! Right panel: pattern metadata above the live demo canvas.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::metadata::{metadata_rows, metadata_sections, HEADING_GAP};
use crate::domain::App;

use super::demos;

/// Rows the canvas keeps when the description is long.
const MIN_CANVAS_HEIGHT: u16 = 12;

/// Columns held back from the wrap estimate, covering the heading gap.
const WRAP_SLACK: u16 = 2;

/// Render the right panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let text_width = area.width.saturating_sub(2).saturating_sub(WRAP_SLACK);
    let wanted = metadata_rows(app.active().entry(), text_width).saturating_add(2);
    let room = area
        .height
        .saturating_sub(MIN_CANVAS_HEIGHT)
        .max(area.height / 2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(wanted.min(room)), // Metadata
            Constraint::Min(0),                   // Canvas
        ])
        .split(area);

    render_metadata(frame, chunks[0], app);
    render_canvas(frame, chunks[1], app);
}

/// Title plus the four descriptive sections, verbatim.
fn render_metadata(frame: &mut Frame, area: Rect, app: &App) {
    let entry = app.active().entry();
    let (r, g, b) = entry.category.accent().rgb();
    let heading = Style::default()
        .fg(Color::Rgb(r, g, b))
        .add_modifier(Modifier::BOLD);

    let text: Vec<Line> = metadata_sections(entry)
        .into_iter()
        .map(|(label, body)| {
            Line::from(vec![
                Span::styled(format!("{label}{HEADING_GAP}"), heading),
                Span::raw(body),
            ])
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} {} ", entry.icon.glyph(), entry.title))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    let total = metadata_rows(entry, inner.width.saturating_sub(WRAP_SLACK));
    let scroll = app
        .metadata_scroll()
        .min(total.saturating_sub(inner.height));

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Demo canvas, followed by its controls line and hint.
fn render_canvas(frame: &mut Frame, area: Rect, app: &App) {
    let demo = app.demo();
    let block = Block::default()
        .title(format!(" simulation://{}.sim ", demo.pattern()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Demo
            Constraint::Length(1), // Controls
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    demos::render(frame, chunks[0], demo);

    let mut controls = Vec::new();
    for control in demo.controls() {
        controls.push(Span::styled(
            format!("[{}]", control.key),
            Style::default().fg(Color::Yellow),
        ));
        controls.push(Span::raw(format!(" {}  ", control.label)));
    }
    frame.render_widget(Paragraph::new(Line::from(controls)), chunks[1]);

    let hint = Line::from(Span::styled(
        format!("» {}", demo.hint()),
        Style::default().fg(Color::LightBlue),
    ));
    frame.render_widget(Paragraph::new(hint).centered(), chunks[2]);
}
