//! # Rendering
//!
//! Full frames drawn into ratatui's `TestBackend`, checked as plain text.

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use pl_catalog::PatternId;
    use pl_lab::{ui, App, AppKey, AppState};
    use ratatui::{backend::TestBackend, Terminal};

    use crate::integration::{app_at, press};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| ui::render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    #[test]
    fn test_wide_frame_shows_sidebar_metadata_and_canvas() {
        let (app, _) = app_at(PatternId::Proxy);
        let screen = draw(&app, 140, 45);

        assert!(screen.contains("PatternLabs"));
        assert!(screen.contains("PATTERNS"));
        assert!(screen.contains("simulation://proxy.sim"));
        assert!(screen.contains("Structural"));
        assert!(screen.contains("[s] Send Req"));
    }

    #[test]
    fn test_narrow_frame_hides_sidebar_until_drawer_opens() {
        let (mut app, now) = app_at(PatternId::Singleton);
        let closed = draw(&app, 80, 40);
        assert!(!closed.contains("PATTERNS"));
        assert!(closed.contains("simulation://singleton.sim"));

        app.handle_key(AppKey::Tab, now);
        let open = draw(&app, 80, 40);
        assert!(open.contains("PATTERNS"));
    }

    #[test]
    fn test_help_overlay_drawn_over_browse() {
        let (mut app, now) = app_at(PatternId::Singleton);
        press(&mut app, "?", now);
        assert_eq!(app.state, AppState::Help);

        let screen = draw(&app, 120, 40);
        assert!(screen.contains("PATTERNLABS HELP"));
    }

    #[test]
    fn test_every_pattern_renders_its_canvas() {
        let mut app = App::new(PatternId::Singleton, Instant::now(), 7);
        for id in PatternId::ALL {
            app.select(id, Instant::now());
            let screen = draw(&app, 120, 40);
            let address = format!("simulation://{}.sim", id.as_str());
            assert!(screen.contains(&address), "missing canvas for {id}");
        }
    }

    fn scenario_tail(id: PatternId) -> &'static str {
        id.entry().scenario.split_whitespace().last().unwrap_or_default()
    }

    #[test]
    fn test_metadata_fits_whole_description_at_120x40() {
        let mut app = App::new(PatternId::Singleton, Instant::now(), 7);
        for id in PatternId::ALL {
            app.select(id, Instant::now());
            let screen = draw(&app, 120, 40);
            for heading in ["What  ", "How?  ", "Why?  ", "Scenario  "] {
                assert!(screen.contains(heading), "{id} lost heading {heading:?}");
            }
            let tail = scenario_tail(id);
            assert!(screen.contains(tail), "{id} scenario cut before {tail:?}");
            assert!(screen.contains(&format!("simulation://{}.sim", id.as_str())));
        }
    }

    #[test]
    fn test_page_down_reveals_scenario_on_short_terminal() {
        let (mut app, now) = app_at(PatternId::Singleton);
        let tail = scenario_tail(PatternId::Singleton);
        assert!(!draw(&app, 120, 26).contains(tail));

        for id in PatternId::ALL {
            app.select(id, now);
            for _ in 0..10 {
                app.handle_key(AppKey::PageDown, now);
            }
            let tail = scenario_tail(id);
            assert!(draw(&app, 120, 26).contains(tail), "{id} scenario unreachable");
        }
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let (mut app, now) = app_at(PatternId::Strategy);
        app.handle_key(AppKey::Tab, now);
        draw(&app, 20, 8);
    }
}
