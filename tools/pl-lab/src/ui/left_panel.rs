//! Left panel: collapsible category sidebar.
//!
//! ```text
//! ┌ PATTERNS ────────────┐
//! │ ▾ Creational         │
//! │ › ⛁ Singleton        │
//! │   ▣ Factory          │
//! │ ▸ Structural         │
//! │ ▾ Behavioral         │
//! │   ⛓ Chain of Resp.   │
//! └──────────────────────┘
//! ```

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use pl_catalog::Category;

use crate::domain::{App, SidebarRow};

/// Render the sidebar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let nav = app.navigation();
    let cursor = nav.cursor();

    let items: Vec<ListItem> = nav
        .visible_rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let marker = if i == cursor { "›" } else { " " };
            let marker = Span::styled(marker, Style::default().fg(Color::Yellow));

            match row {
                SidebarRow::Category(category) => {
                    let arrow = if nav.is_expanded(category) { "▾" } else { "▸" };
                    ListItem::new(Line::from(vec![
                        marker,
                        Span::styled(
                            format!("{arrow} {}", category.name().to_uppercase()),
                            accent(category).add_modifier(Modifier::BOLD),
                        ),
                    ]))
                }
                SidebarRow::Pattern(id) => {
                    let entry = id.entry();
                    let line = Line::from(vec![
                        marker,
                        Span::raw("  "),
                        Span::styled(format!("{} ", entry.icon.glyph()), accent(entry.category)),
                        Span::raw(entry.title),
                    ]);

                    // Highlight the active pattern
                    let style = if id == nav.active() {
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    ListItem::new(line).style(style)
                }
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" PATTERNS ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}

fn accent(category: Category) -> Style {
    let (r, g, b) = category.accent().rgb();
    Style::default().fg(Color::Rgb(r, g, b))
}
