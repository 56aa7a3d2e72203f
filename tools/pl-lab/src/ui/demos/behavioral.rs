//! Canvas renderers for the behavioral demos.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Gauge},
    Frame,
};

use pl_demos::demos::behavioral::{
    ChainDemo, CommandDemo, IteratorDemo, MediatorDemo, MementoDemo, ObserverDemo, ObserverView,
    PipelineKind, StateDemo, StrategyDemo, StrategyKind, TcpState, TemplateMethodDemo,
    VisitorDemo,
};
use pl_demos::Demo;

use super::{bad, draw_lines, highlight, label, muted, ok, selected, tail_fit};

pub fn chain(frame: &mut Frame, area: Rect, demo: &ChainDemo) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Simple Query ", ok()),
            Span::styled(" Complex Query ", Style::default().fg(Color::Yellow)),
            Span::styled(" Critical Bug ", bad()),
        ]),
        Line::raw(""),
    ];
    if demo.log().is_empty() {
        lines.push(Line::from(Span::styled("Waiting for ticket...", muted())));
    }
    for step in demo.log() {
        let style = if step.solved { ok() } else { label() };
        lines.push(Line::from(vec![
            Span::styled(
                format!("👥 {:<14}", step.title()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(step.outcome(), style),
        ]));
    }
    draw_lines(frame, area, lines);
}

pub fn command(frame: &mut Frame, area: Rect, demo: &CommandDemo) {
    let mut lines = vec![
        Line::from(Span::styled("CURRENT BALANCE", label())),
        Line::from(Span::styled(format!("${}", demo.balance()), highlight())),
        Line::raw(""),
        Line::from(Span::styled("TRANSACTION LOG", label())),
    ];
    if demo.history().is_empty() {
        lines.push(Line::from(Span::styled("No transactions", muted())));
    }
    let budget = (area.height as usize).saturating_sub(lines.len());
    for tx in tail_fit(demo.history(), budget) {
        let style = if tx.signed_amount().starts_with('+') { ok() } else { bad() };
        lines.push(Line::from(vec![
            Span::raw(format!("{:<10}", tx.label())),
            Span::styled(tx.signed_amount(), style),
        ]));
    }
    draw_lines(frame, area, lines);
}

pub fn iterator(frame: &mut Frame, area: Rect, demo: &IteratorDemo) {
    let mut lines = vec![Line::from(Span::styled("PLAYLIST ITERATOR", label()))];
    for (i, track) in demo.tracks().iter().enumerate() {
        let current = i == demo.current();
        let marker = if current { "▶ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{track:<12}"),
            selected(current),
        )));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("  ⏮ prev()      next() ⏭", label())));
    draw_lines(frame, area, lines);
}

pub fn mediator(frame: &mut Frame, area: Rect, demo: &MediatorDemo) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("(A) Alice", Style::default().fg(Color::Blue)),
            Span::styled("  ──▶  ( HUB )  ◀──  ", label()),
            Span::styled("Bob (B)", Style::default().fg(Color::Green)),
        ]),
        Line::raw(""),
    ];
    if demo.hub().is_empty() {
        lines.push(Line::from(Span::styled("No messages routed...", muted())));
    }
    for message in demo.hub().messages() {
        let color = if message.user == "Alice" { Color::Blue } else { Color::Green };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", message.user),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(message.text),
        ]));
    }
    draw_lines(frame, area, lines);
}

pub fn memento(frame: &mut Frame, area: Rect, demo: &MementoDemo) {
    let editor = if demo.is_editing() && demo.restore_prompt().is_none() {
        Span::styled(format!("{}▏", demo.text()), highlight())
    } else {
        Span::raw(demo.text().to_string())
    };

    let mut lines = vec![
        Line::from(vec![Span::styled("EDITOR  ", label()), editor]),
        Line::raw(""),
        Line::from(Span::styled("HISTORY", label())),
    ];
    if let Some(number) = demo.restore_prompt() {
        lines.insert(
            1,
            Line::from(vec![
                Span::styled("RESTORE # ", label()),
                Span::styled(format!("{number}▏"), highlight()),
            ]),
        );
    }
    let labels: Vec<String> = demo.caretaker().labels().collect();
    if labels.is_empty() {
        lines.push(Line::from(Span::styled("Empty", muted())));
    }
    let budget = (area.height as usize).saturating_sub(lines.len());
    for entry in tail_fit(&labels, budget) {
        lines.push(Line::from(Span::raw(entry.clone())));
    }
    draw_lines(frame, area, lines);
}

pub fn observer(frame: &mut Frame, area: Rect, demo: &ObserverDemo) {
    let metrics = demo.metrics();
    let mut lines = vec![
        Line::from(vec![
            Span::styled("SUBJECT ", label()),
            Span::styled(format!("cpu {}%  ram {}GB", metrics.cpu, metrics.ram), highlight()),
        ]),
        Line::raw(""),
    ];

    for observer in demo.observers() {
        lines.push(Line::from(Span::styled(observer.name().to_uppercase(), label())));
        match observer.view() {
            ObserverView::Cpu { cpu, bars } => {
                for bar in bars {
                    let width = (bar / 10.0).round() as usize;
                    lines.push(Line::from(Span::styled(
                        format!("{:<10}", "█".repeat(width)),
                        Style::default().fg(Color::Blue),
                    )));
                }
                lines.push(Line::from(Span::raw(format!("{cpu}%"))));
            }
            ObserverView::Log { lines: log } => {
                lines.extend(log.into_iter().map(|l| Line::from(Span::styled(l, ok()))));
            }
            ObserverView::Alert { high_load } => {
                lines.push(if high_load {
                    Line::from(Span::styled("⚠ HIGH LOAD", bad().add_modifier(Modifier::BOLD)))
                } else {
                    Line::from(Span::styled("✓ NORMAL", ok()))
                });
            }
        }
        lines.push(Line::raw(""));
    }
    draw_lines(frame, area, lines);
}

pub fn state(frame: &mut Frame, area: Rect, demo: &StateDemo) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Endpoints
            Constraint::Length(1), // Link
            Constraint::Min(0),    // Events
        ])
        .split(area);

    let state = demo.state();
    let endpoint = if state == TcpState::Established { ok() } else { label() };
    draw_lines(
        frame,
        chunks[0],
        vec![Line::from(vec![
            Span::styled("[CLIENT]", endpoint),
            Span::raw("                    "),
            Span::styled("[SERVER]", endpoint),
        ])],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(state.progress())
        .label(Span::styled(
            state.label(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, chunks[1]);

    let enabled = |on: bool| if on { highlight() } else { muted() };
    draw_lines(
        frame,
        chunks[2],
        vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled("1. Connect (SYN)  ", enabled(state == TcpState::Closed)),
                Span::styled("2. Close (FIN)  ", enabled(state == TcpState::Established)),
                Span::styled("Reset", highlight()),
            ]),
        ],
    );
}

pub fn strategy(frame: &mut Frame, area: Rect, demo: &StrategyDemo) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Strategy selector
            Constraint::Min(5),    // Servers
        ])
        .split(area);

    let balancer = demo.balancer();
    let mut selector = Vec::new();
    for kind in StrategyKind::ALL {
        selector.push(Span::styled(
            format!(" {} ", kind.label()),
            selected(kind == balancer.strategy()),
        ));
        selector.push(Span::raw(" "));
    }
    draw_lines(frame, chunks[0], vec![Line::from(selector)]);

    let bars: Vec<Bar> = balancer
        .servers()
        .iter()
        .map(|server| {
            Bar::default()
                .value(u64::from(server.load_percent()))
                .text_value(format!("{} reqs", server.requests))
                .label(Line::from(format!("Srv-{}", server.id)))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(3)
        .max(100)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::White).bg(Color::Blue));
    frame.render_widget(chart, chunks[1]);
}

pub fn template_method(frame: &mut Frame, area: Rect, demo: &TemplateMethodDemo) {
    let kind = demo.kind();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Node.js Pipeline ", selected(kind == PipelineKind::Node)),
            Span::raw("  "),
            Span::styled(" Java Pipeline ", selected(kind == PipelineKind::Java)),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Terminal Output  ", label()),
            if demo.is_running() {
                Span::styled("Running...", Style::default().fg(Color::LightBlue))
            } else {
                Span::raw("")
            },
        ]),
    ];
    if demo.lines().is_empty() {
        lines.push(Line::from(Span::styled("// Ready to build...", muted())));
    }
    lines.extend(demo.lines().iter().map(|l| Line::raw(l.clone())));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!("[ Run {} Pipeline ]", kind.name()),
        if demo.is_running() { muted() } else { highlight() },
    )));
    draw_lines(frame, area, lines);
}

pub fn visitor(frame: &mut Frame, area: Rect, demo: &VisitorDemo) {
    let shapes: Vec<Span> = demo
        .shapes()
        .iter()
        .map(|shape| Span::styled(format!(" {} ", shape.kind()), selected(false)))
        .collect();

    let mut lines = vec![
        Line::from(shapes),
        Line::from(Span::styled("accept(XmlExportVisitor | JsonExportVisitor)", label())),
        Line::raw(""),
    ];
    match demo.result() {
        Some(result) => lines.extend(
            result
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::LightYellow)))),
        ),
        None => lines.push(Line::from(Span::styled(
            "// Click a visitor to export...",
            muted(),
        ))),
    }
    draw_lines(frame, area, lines);
}
