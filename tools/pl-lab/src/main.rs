//! PatternLabs: interactive terminal reference for software design patterns.
//!
//! ## Usage
//!
//! ```bash
//! # Start on the default pattern
//! pattern-labs
//!
//! # Jump straight to a pattern with a fixed seed
//! pattern-labs --pattern proxy --seed 42
//!
//! # Print the catalog as JSON
//! pattern-labs --list --json
//! ```

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::time::MissedTickBehavior;

use pl_catalog::{by_category, entries, Category, PatternId};
use pl_lab::domain::{App, AppKey};
use pl_lab::ui;
use pl_telemetry::{init_telemetry, log_event, TelemetryConfig};

/// PatternLabs: design patterns, explained and simulated in the terminal
#[derive(Parser, Debug)]
#[command(name = "pattern-labs")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to open first (e.g. `singleton`, `template_method`)
    #[arg(short, long)]
    pattern: Option<PatternId>,

    /// Demo tick interval in milliseconds
    #[arg(long, default_value = "50")]
    tick_ms: u64,

    /// Seed for every random choice the demos make
    #[arg(long)]
    seed: Option<u64>,

    /// Print the catalog and exit
    #[arg(long)]
    list: bool,

    /// With --list, print the catalog as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Log file (overrides PL_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter directive (overrides PL_LOG_LEVEL / RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        return print_catalog(args.json);
    }

    let mut config = TelemetryConfig::from_env();
    if let Some(level) = args.log_level {
        config = config.with_log_level(level);
    }
    if let Some(path) = args.log_file {
        config = config.with_log_file(path);
    }
    let _telemetry = init_telemetry(&config).context("Failed to initialize telemetry")?;

    let initial = args.pattern.unwrap_or(PatternId::DEFAULT);
    let seed = args.seed.unwrap_or_else(rand::random);
    let tick = Duration::from_millis(args.tick_ms.max(1));
    log_event!(
        info,
        "shell",
        "Starting PatternLabs",
        pattern = %initial,
        seed = seed,
        tick_ms = args.tick_ms,
        log_file = %config.log_file.display()
    );

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let mut app = App::new(initial, Instant::now(), seed);

    let result = run_app(&mut terminal, &mut app, tick).await;

    // Restore terminal on both paths before reporting the error
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    if let Err(ref err) = result {
        log_event!(error, "shell", "PatternLabs exited with error", error = %err);
    }
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let entered = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    let terminal = unwind_on_error(entered, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;
    Ok(terminal)
}

/// Run `unwind` when `step` failed, then hand the result back unchanged.
fn unwind_on_error<T>(step: io::Result<T>, unwind: impl FnOnce()) -> io::Result<T> {
    if step.is_err() {
        unwind();
    }
    step
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Main application loop: redraw, then wait for a key or the next tick.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            _ = ticker.tick() => {
                app.tick(Instant::now());
            }
            event = events.next() => match event {
                Some(Ok(event)) => apply_event(app, event, Instant::now()),
                Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                None => return Ok(()),
            },
        }

        if app.should_quit() {
            log_event!(info, "shell", "Quit requested", pattern = %app.active());
            return Ok(());
        }
    }
}

/// Feed one terminal event to the app. Only key presses count.
fn apply_event(app: &mut App, event: Event, now: Instant) {
    let Event::Key(key) = event else {
        return;
    };
    if key.kind != KeyEventKind::Press {
        return;
    }
    if let Some(key) = map_key(key) {
        app.handle_key(key, now);
    }
}

/// Translate a crossterm key into the shell's key type.
fn map_key(key: KeyEvent) -> Option<AppKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(AppKey::CtrlC),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(c) => Some(AppKey::Char(c)),
        KeyCode::Up => Some(AppKey::Up),
        KeyCode::Down => Some(AppKey::Down),
        KeyCode::Enter => Some(AppKey::Enter),
        KeyCode::Tab => Some(AppKey::Tab),
        KeyCode::Esc => Some(AppKey::Esc),
        KeyCode::Backspace => Some(AppKey::Backspace),
        KeyCode::PageUp => Some(AppKey::PageUp),
        KeyCode::PageDown => Some(AppKey::PageDown),
        _ => None,
    }
}

/// `--list`: the catalog grouped by category, or the raw entries as JSON.
fn print_catalog(json: bool) -> Result<()> {
    if json {
        let text =
            serde_json::to_string_pretty(entries()).context("Failed to serialize catalog")?;
        println!("{text}");
        return Ok(());
    }

    for category in Category::ALL {
        println!("{}", category.name());
        for entry in by_category(category) {
            println!("  {:<24} {}", entry.id.as_str(), entry.title);
        }
    }
    Ok(())
}
