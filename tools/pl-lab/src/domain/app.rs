//! Application state management.

use std::time::Instant;

use pl_catalog::PatternId;
use pl_demos::{DemoInput, DemoState, InputOutcome};
use pl_telemetry::log_event;

use super::metadata::{metadata_rows, METADATA_SCROLL_STEP, MIN_METADATA_WIDTH};
use super::{Navigation, Selection};

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Sidebar, metadata and demo canvas.
    #[default]
    Browse,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Terminal-independent key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKey {
    Char(char),
    Up,
    Down,
    Enter,
    Tab,
    Esc,
    Backspace,
    PageUp,
    PageDown,
    CtrlC,
}

impl AppKey {
    /// The demo-facing form of this key, if it has one.
    fn as_demo_input(self) -> Option<DemoInput> {
        match self {
            AppKey::Char(c) => Some(DemoInput::Key(c)),
            AppKey::Enter => Some(DemoInput::Enter),
            AppKey::Esc => Some(DemoInput::Escape),
            AppKey::Backspace => Some(DemoInput::Backspace),
            AppKey::Up
            | AppKey::Down
            | AppKey::Tab
            | AppKey::PageUp
            | AppKey::PageDown
            | AppKey::CtrlC => None,
        }
    }
}

/// Main application model.
#[derive(Debug)]
pub struct App {
    /// Current application state/view.
    pub state: AppState,
    nav: Navigation,
    demo: DemoState,
    /// Rows the metadata panel is scrolled down by.
    metadata_scroll: u16,
    seed: u64,
    mounts: u64,
}

impl App {
    /// Create the shell with `initial` active and its demo mounted.
    pub fn new(initial: PatternId, now: Instant, seed: u64) -> Self {
        Self {
            state: AppState::Browse,
            nav: Navigation::new(initial),
            demo: DemoState::mount(initial, now, seed),
            metadata_scroll: 0,
            seed,
            mounts: 1,
        }
    }

    pub fn navigation(&self) -> &Navigation {
        &self.nav
    }

    pub fn demo(&self) -> &DemoState {
        &self.demo
    }

    pub fn active(&self) -> PatternId {
        self.nav.active()
    }

    pub fn metadata_scroll(&self) -> u16 {
        self.metadata_scroll
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: AppKey, now: Instant) {
        if key == AppKey::CtrlC {
            self.state = AppState::Quit;
            return;
        }
        match self.state {
            AppState::Browse => self.handle_browse_key(key, now),
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Browse;
            }
            AppState::Quit => {}
        }
    }

    fn handle_browse_key(&mut self, key: AppKey, now: Instant) {
        if self.demo.is_editing() {
            self.forward(key, now);
            return;
        }
        match key {
            AppKey::Char('q') => self.state = AppState::Quit,
            AppKey::Char('?') => self.state = AppState::Help,
            AppKey::Tab => self.nav.toggle_sidebar(),
            AppKey::Up => self.nav.cursor_up(),
            AppKey::Down => self.nav.cursor_down(),
            AppKey::Enter => {
                let selection = self.nav.activate_cursor();
                self.apply(selection, now);
            }
            AppKey::Esc => self.nav.close_sidebar(),
            AppKey::PageUp => {
                self.metadata_scroll = self.metadata_scroll.saturating_sub(METADATA_SCROLL_STEP);
            }
            AppKey::PageDown => {
                let limit = metadata_rows(self.active().entry(), MIN_METADATA_WIDTH);
                self.metadata_scroll = self
                    .metadata_scroll
                    .saturating_add(METADATA_SCROLL_STEP)
                    .min(limit);
            }
            other => {
                self.forward(other, now);
            }
        }
    }

    fn forward(&mut self, key: AppKey, now: Instant) -> InputOutcome {
        match key.as_demo_input() {
            Some(input) => self.demo.handle(input, now),
            None => InputOutcome::Ignored,
        }
    }

    /// Switch to `id` directly, as a sidebar click would.
    pub fn select(&mut self, id: PatternId, now: Instant) -> Selection {
        let selection = self.nav.select(id);
        self.apply(selection, now);
        selection
    }

    fn apply(&mut self, selection: Selection, now: Instant) {
        let Selection::Switched { from, to } = selection else {
            return;
        };
        let cancelled = self.demo.teardown();
        let seed = self.seed.wrapping_add(self.mounts);
        self.demo = DemoState::mount(to, now, seed);
        self.mounts += 1;
        self.metadata_scroll = 0;
        log_event!(
            info,
            "nav",
            "Pattern switched",
            from = %from,
            to = %to,
            cancelled_timers = cancelled
        );
    }

    /// Advance the mounted demo's timers.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.demo.tick(now)
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        App::new(PatternId::Singleton, Instant::now(), 1)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(AppKey::Char('q'), Instant::now());
        assert!(app.should_quit());

        let mut app = self::app();
        app.handle_key(AppKey::CtrlC, Instant::now());
        assert!(app.should_quit());
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app();
        app.handle_key(AppKey::Char('?'), Instant::now());
        assert_eq!(app.state, AppState::Help);
        app.handle_key(AppKey::Char('q'), Instant::now());
        assert_eq!(app.state, AppState::Browse);
    }

    #[test]
    fn test_switch_remounts_and_cancels_timers() {
        let t0 = Instant::now();
        let mut app = App::new(PatternId::Facade, t0, 1);
        app.handle_key(AppKey::Char('d'), t0);
        assert_eq!(app.demo().pending_timers(), 6);

        app.select(PatternId::Facade, t0);
        assert_eq!(app.demo().pending_timers(), 6);

        app.select(PatternId::Proxy, t0);
        assert_eq!(app.active(), PatternId::Proxy);
        assert_eq!(app.demo().pattern(), PatternId::Proxy);
        assert_eq!(app.tick(t0 + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_editing_demo_captures_shell_keys() {
        let now = Instant::now();
        let mut app = App::new(PatternId::Bridge, now, 1);
        app.handle_key(AppKey::Char('e'), now);
        assert!(app.demo().is_editing());

        app.handle_key(AppKey::Char('q'), now);
        app.handle_key(AppKey::Char('?'), now);
        assert_eq!(app.state, AppState::Browse);

        app.handle_key(AppKey::Esc, now);
        assert!(!app.demo().is_editing());
        app.handle_key(AppKey::Char('q'), now);
        assert!(app.should_quit());
    }

    #[test]
    fn test_page_keys_scroll_metadata_and_reset_on_switch() {
        let now = Instant::now();
        let mut app = app();
        app.handle_key(AppKey::PageUp, now);
        assert_eq!(app.metadata_scroll(), 0);

        app.handle_key(AppKey::PageDown, now);
        app.handle_key(AppKey::PageDown, now);
        assert_eq!(app.metadata_scroll(), 2 * METADATA_SCROLL_STEP);
        app.handle_key(AppKey::PageUp, now);
        assert_eq!(app.metadata_scroll(), METADATA_SCROLL_STEP);

        for _ in 0..200 {
            app.handle_key(AppKey::PageDown, now);
        }
        let limit = metadata_rows(PatternId::Singleton.entry(), MIN_METADATA_WIDTH);
        assert_eq!(app.metadata_scroll(), limit);

        app.select(PatternId::Proxy, now);
        assert_eq!(app.metadata_scroll(), 0);
    }

    #[test]
    fn test_enter_on_cursor_switches_pattern() {
        let now = Instant::now();
        let mut app = app();
        app.handle_key(AppKey::Down, now);
        app.handle_key(AppKey::Enter, now);
        assert_eq!(app.active(), PatternId::Factory);
        assert_eq!(app.demo().pattern(), PatternId::Factory);
    }
}
