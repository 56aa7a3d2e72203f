//! Canvas renderers for the structural demos.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use pl_demos::demos::structural::{
    AdapterDemo, AdapterStatus, BridgeDemo, CompositeDemo, DecoratorDemo, DriverKind, FacadeDemo,
    FlyweightDemo, ProxyDemo, RequestStatus,
};

use super::{bad, draw_lines, highlight, label, muted, ok, selected};

pub fn adapter(frame: &mut Frame, area: Rect, demo: &AdapterDemo) {
    let (status, style) = match demo.status() {
        AdapterStatus::Idle => ("IDLE", muted()),
        AdapterStatus::Converting => ("CONVERTING...", Style::default().fg(Color::Yellow)),
        AdapterStatus::Done => ("DONE", ok()),
    };

    let lines = vec![
        Line::from(vec![Span::styled("Adapter: ", label()), Span::styled(status, style)]),
        Line::raw(""),
        Line::from(Span::styled("LEGACY SERVICE (XML)", label())),
        Line::from(Span::styled(
            demo.legacy_payload().unwrap_or("...").to_string(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled("        ⇅ XmlToJsonAdapter", label())),
        Line::from(Span::styled("MODERN CLIENT (JSON)", label())),
        Line::from(Span::styled(
            demo.json_payload().unwrap_or("waiting...").to_string(),
            ok(),
        )),
    ];
    draw_lines(frame, area, lines);
}

pub fn bridge(frame: &mut Frame, area: Rect, demo: &BridgeDemo) {
    let driver = demo.repository().driver();
    let field = demo.name_field();
    let name = if field.is_editing() {
        Line::from(vec![
            Span::styled("Name: ", label()),
            Span::styled(format!("{}▏", field.value()), highlight()),
        ])
    } else if field.value().is_empty() {
        Line::from(vec![Span::styled("Name: ", label()), Span::styled("Alice (default)", muted())])
    } else {
        Line::from(vec![Span::styled("Name: ", label()), Span::raw(field.value().to_string())])
    };

    let query = match demo.query() {
        Some(q) => Span::styled(q.to_string(), ok()),
        None => Span::styled("// Waiting for query...", muted()),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("UserRepository → ", label()),
            Span::styled(format!(" {} ", DriverKind::Sql.label()), selected(driver == DriverKind::Sql)),
            Span::raw(" "),
            Span::styled(format!(" {} ", DriverKind::Mongo.label()), selected(driver == DriverKind::Mongo)),
        ]),
        Line::raw(""),
        name,
        Line::raw(""),
        Line::from(query),
    ];
    draw_lines(frame, area, lines);
}

pub fn composite(frame: &mut Frame, area: Rect, demo: &CompositeDemo) {
    let mut lines: Vec<Line> = demo
        .rows()
        .into_iter()
        .map(|row| {
            let indent = "  ".repeat(row.depth);
            let (icon, style) = match row.folder {
                Some(true) => ("▾ 📁", Style::default().fg(Color::Yellow)),
                Some(false) => ("▸ 📁", Style::default().fg(Color::Yellow)),
                None => ("  📄", Style::default().fg(Color::Gray)),
            };
            Line::from(vec![
                Span::raw(indent),
                Span::styled(format!("{icon} {}", row.name), style),
                Span::styled(format!("  {}MB", row.size_mb), label()),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Total size(): ", label()),
        Span::styled(format!("{}MB", demo.total_mb()), highlight()),
    ]));
    draw_lines(frame, area, lines);
}

pub fn decorator(frame: &mut Frame, area: Rect, demo: &DecoratorDemo) {
    let layer = |name: &'static str, on: bool| {
        Span::styled(
            format!(" {name} {} ", if on { "ON" } else { "OFF" }),
            selected(on),
        )
    };
    let output = if demo.is_processing() {
        Span::styled("processing...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(demo.output().to_string(), highlight())
    };

    let lines = vec![
        Line::from(vec![
            layer("ZIP", demo.compression()),
            Span::raw("  "),
            layer("AES", demo.encryption()),
        ]),
        Line::raw(""),
        Line::from(Span::styled("Compression( Encryption( Data ) )", label())),
        Line::from(vec![Span::styled("read() → ", label()), output]),
    ];
    draw_lines(frame, area, lines);
}

pub fn facade(frame: &mut Frame, area: Rect, demo: &FacadeDemo) {
    let deploy = if demo.is_busy() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled("( ⚡ DEPLOY )", deploy),
            Span::styled("  Facade → compiler, tests, S3, CDN", label()),
        ]),
        Line::raw(""),
    ];
    if demo.lines().is_empty() {
        lines.push(Line::from(Span::styled(
            "System Idle... Waiting for trigger.",
            muted(),
        )));
    }
    lines.extend(
        demo.lines()
            .iter()
            .map(|line| Line::from(Span::styled(*line, ok()))),
    );
    if demo.is_busy() {
        lines.push(Line::from(Span::styled("_", ok())));
    }
    draw_lines(frame, area, lines);
}

pub fn flyweight(frame: &mut Frame, area: Rect, demo: &FlyweightDemo) {
    let height = area.height.saturating_sub(2) as usize;
    let width = area.width as usize;
    let mut grid = vec![vec![' '; width]; height];

    if width > 0 && height > 0 {
        for particle in demo.particles() {
            let col = ((particle.x / 100.0) * (width - 1) as f64).round() as usize;
            let row = ((particle.y / 100.0) * (height - 1) as f64).round() as usize;
            let glyph = if particle.scale >= 1.0 { '✦' } else { '·' };
            grid[row.min(height - 1)][col.min(width - 1)] = glyph;
        }
    }

    let mut lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(Span::styled(
                row.into_iter().collect::<String>(),
                Style::default().fg(Color::LightYellow),
            ))
        })
        .collect();
    lines.push(Line::from(vec![
        Span::styled(format!("{} Particles Rendered", demo.particles().len()), highlight()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("RAM Used: ", label()),
        Span::styled("low", ok()),
        Span::styled("   Texture instances: ", label()),
        Span::styled(demo.texture_instances().to_string(), ok()),
    ]));
    draw_lines(frame, area, lines);
}

pub fn proxy(frame: &mut Frame, area: Rect, demo: &ProxyDemo) {
    let firewall = if demo.is_blocked() {
        Span::styled(" PROXY: BLOCKING ", bad().add_modifier(Modifier::BOLD))
    } else {
        Span::styled(" PROXY ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("📱 Client → "),
            firewall,
            Span::styled(format!(" {}", demo.limit_label()), label()),
        ]),
        Line::raw(""),
        Line::from(Span::styled("REQUEST LOG", label())),
    ];
    for record in demo.log() {
        let (mark, style) = match record.status {
            RequestStatus::Ok => ("✓", ok()),
            RequestStatus::Blocked => ("✗", bad()),
        };
        lines.push(Line::from(Span::styled(
            format!("{mark} {}", record.status.label()),
            style,
        )));
    }
    draw_lines(frame, area, lines);
}
