//! Canvas renderers for the creational demos.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use pl_demos::demos::creational::{
    AbstractFactoryDemo, BuilderDemo, FactoryDemo, PaymentKind, PrototypeDemo, SingletonDemo,
    Theme, BUILD_ID,
};

use super::{draw_lines, highlight, label, muted, ok, selected, tail_fit};

pub fn singleton(frame: &mut Frame, area: Rect, demo: &SingletonDemo) {
    let instance = match demo.instance() {
        Some(pool) => Span::styled(pool.id().to_string(), highlight()),
        None => Span::styled("null", muted()),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Client A   Client B   Client C"),
        ]),
        Line::from(Span::styled("   │          │          │", label())),
        Line::from(vec![Span::styled("ConnectionPool.getInstance() → ", label()), instance]),
        Line::raw(""),
        Line::from(Span::styled("ACCESS LOG", label())),
    ];
    if demo.requests().is_empty() {
        lines.push(Line::from(Span::styled("No requests yet", muted())));
    }
    for req in demo.requests().iter() {
        let (tag, style) = if req.created {
            ("INIT", Style::default().fg(Color::Yellow))
        } else {
            ("REUSE", ok())
        };
        lines.push(Line::from(vec![
            Span::raw(format!("#{:<3} Client {} → {} ", req.seq, req.client, req.pool_id)),
            Span::styled(tag, style),
        ]));
    }
    draw_lines(frame, area, lines);
}

pub fn factory(frame: &mut Frame, area: Rect, demo: &FactoryDemo) {
    let buttons: Vec<Span> = PaymentKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| Span::raw(format!("[{}] {}   ", i + 1, kind.label())))
        .collect();

    let mut lines = vec![
        Line::from(buttons),
        Line::from(Span::styled("        ↓ PaymentFactory.create(type)", label())),
        Line::raw(""),
        Line::from(Span::styled("HEAP MEMORY", label())),
    ];
    if demo.heap().is_empty() {
        lines.push(Line::from(Span::styled("Empty heap", muted())));
    }
    for record in demo.heap().iter() {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", record.class_name), highlight()),
            Span::styled(format!("#{} ({})", record.seq, record.kind.label()), label()),
        ]));
    }
    draw_lines(frame, area, lines);
}

pub fn abstract_factory(frame: &mut Frame, area: Rect, demo: &AbstractFactoryDemo) {
    let theme = demo.theme();
    let (window, chrome) = match theme {
        Theme::Dark => (
            Style::default().fg(Color::White).bg(Color::Black),
            "macOS Dark",
        ),
        Theme::Light => (
            Style::default().fg(Color::Black).bg(Color::White),
            "macOS Light",
        ),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Dark Theme Factory ", selected(theme == Theme::Dark)),
            Span::raw("  "),
            Span::styled(" Light Theme Factory ", selected(theme == Theme::Light)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(format!(" ● ● ●  {chrome:<22}"), window)),
        Line::from(Span::styled(format!("  [ {:<25}]", demo.button().label), window)),
        Line::from(Span::styled(format!("  ☑ {:<27}", demo.checkbox().label), window)),
        Line::from(Span::styled(format!("{:<32}", ""), window)),
    ];
    draw_lines(frame, area, lines);
}

pub fn builder(frame: &mut Frame, area: Rect, demo: &BuilderDemo) {
    let builder = demo.builder();
    let part = |value: Option<String>| match value {
        Some(text) => Span::styled(text, ok()),
        None => Span::styled("Not Selected", muted()),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("CPU   ", label()),
            part(builder.selected_cpu().map(|c| c.describe())),
        ]),
        Line::from(vec![
            Span::styled("RAM   ", label()),
            part(builder.selected_ram().map(|r| r.describe())),
        ]),
        Line::from(vec![
            Span::styled("DISK  ", label()),
            part(builder.selected_disk().map(|d| d.describe())),
        ]),
        Line::raw(""),
    ];
    match builder.build() {
        Some(_) => lines.push(Line::from(vec![
            Span::styled("BUILD ", label()),
            Span::styled(
                format!("{BUILD_ID} ✓ ready to provision"),
                ok().add_modifier(Modifier::BOLD),
            ),
        ])),
        None => lines.push(Line::from(Span::styled(
            "Select all components to build",
            muted(),
        ))),
    }
    draw_lines(frame, area, lines);
}

pub fn prototype(frame: &mut Frame, area: Rect, demo: &PrototypeDemo) {
    let template = demo.template();
    let mut lines = vec![
        Line::from(vec![
            Span::styled("TEMPLATE ", label()),
            Span::styled(template.name.clone(), highlight()),
            Span::raw(format!(" ({}, {})", template.image, template.packages.join(", "))),
        ]),
        Line::from(Span::styled("   ↓ clone()", label())),
    ];

    let clones = &demo.machines()[1..];
    if clones.is_empty() {
        lines.push(Line::from(Span::styled("No clones yet", muted())));
    }
    let budget = (area.height as usize).saturating_sub(lines.len());
    for vm in tail_fit(clones, budget) {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<10} pid {:04} ", vm.name, vm.pid)),
            Span::styled("RUNNING", ok()),
        ]));
    }
    draw_lines(frame, area, lines);
}
