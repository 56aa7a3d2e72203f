//! # Navigation Flows
//!
//! The shell's sidebar, selection and demo lifecycle working together:
//! keys move the cursor, Enter switches patterns, and every switch tears
//! down the old demo before mounting a fresh one.

#[cfg(test)]
mod tests {
    use pl_catalog::{Category, PatternId};
    use pl_demos::DemoState;
    use pl_lab::{AppKey, AppState, Selection, SidebarRow};

    use crate::integration::{app_at, ms, press};

    // =============================================================================
    // SIDEBAR CURSOR
    // =============================================================================

    #[test]
    fn test_cursor_down_then_enter_switches_pattern() {
        let (mut app, now) = app_at(PatternId::Singleton);
        app.handle_key(AppKey::Down, now);
        assert_eq!(
            app.navigation().cursor_row(),
            Some(SidebarRow::Pattern(PatternId::Factory))
        );

        app.handle_key(AppKey::Enter, now);
        assert_eq!(app.active(), PatternId::Factory);
        assert_eq!(app.demo().pattern(), PatternId::Factory);
    }

    #[test]
    fn test_cursor_wraps_past_first_row() {
        let (mut app, now) = app_at(PatternId::Singleton);
        app.handle_key(AppKey::Up, now); // Creational header
        app.handle_key(AppKey::Up, now); // wraps to the last row
        assert_eq!(
            app.navigation().cursor_row(),
            Some(SidebarRow::Pattern(PatternId::Visitor))
        );
        app.handle_key(AppKey::Enter, now);
        assert_eq!(app.active(), PatternId::Visitor);
    }

    #[test]
    fn test_enter_on_header_folds_category_without_switching() {
        let (mut app, now) = app_at(PatternId::Singleton);
        app.handle_key(AppKey::Up, now);
        assert_eq!(
            app.navigation().cursor_row(),
            Some(SidebarRow::Category(Category::Creational))
        );

        app.handle_key(AppKey::Enter, now);
        assert!(!app.navigation().is_expanded(Category::Creational));
        assert_eq!(app.navigation().visible_rows().len(), 20);
        assert_eq!(app.active(), PatternId::Singleton);

        app.handle_key(AppKey::Enter, now);
        assert!(app.navigation().is_expanded(Category::Creational));
        assert_eq!(app.navigation().visible_rows().len(), 25);
    }

    // =============================================================================
    // DRAWER AND OVERLAY
    // =============================================================================

    #[test]
    fn test_tab_toggles_drawer_and_esc_closes_it() {
        let (mut app, now) = app_at(PatternId::Singleton);
        assert!(!app.navigation().is_sidebar_open());
        app.handle_key(AppKey::Tab, now);
        assert!(app.navigation().is_sidebar_open());
        app.handle_key(AppKey::Esc, now);
        assert!(!app.navigation().is_sidebar_open());
    }

    #[test]
    fn test_help_swallows_next_key() {
        let (mut app, now) = app_at(PatternId::Singleton);
        press(&mut app, "?", now);
        assert_eq!(app.state, AppState::Help);

        // The key that closes help does not reach the demo or quit.
        press(&mut app, "q", now);
        assert_eq!(app.state, AppState::Browse);
        assert!(!app.should_quit());
    }

    // =============================================================================
    // DEMO LIFECYCLE
    // =============================================================================

    #[test]
    fn test_reselecting_active_pattern_keeps_demo_state() {
        let (mut app, now) = app_at(PatternId::Command);
        press(&mut app, "dd", now);

        assert_eq!(app.select(PatternId::Command, now), Selection::Unchanged);
        match app.demo() {
            DemoState::Command(demo) => assert_eq!(demo.balance(), 1200),
            other => panic!("unexpected demo {:?}", other.pattern()),
        }
    }

    #[test]
    fn test_switching_away_and_back_remounts_fresh_state() {
        let (mut app, now) = app_at(PatternId::Command);
        press(&mut app, "dw", now);

        app.select(PatternId::Proxy, now);
        let selection = app.select(PatternId::Command, now);
        assert_eq!(
            selection,
            Selection::Switched {
                from: PatternId::Proxy,
                to: PatternId::Command
            }
        );
        match app.demo() {
            DemoState::Command(demo) => {
                assert_eq!(demo.balance(), 1000);
                assert!(demo.history().is_empty());
            }
            other => panic!("unexpected demo {:?}", other.pattern()),
        }
    }

    #[test]
    fn test_switch_cancels_pending_timers() {
        let (mut app, now) = app_at(PatternId::Facade);
        press(&mut app, "d", now);
        assert!(app.demo().pending_timers() > 0);

        app.select(PatternId::Singleton, now);
        assert_eq!(app.demo().pending_timers(), 0);
        assert_eq!(app.tick(now + ms(5_000)), 0);

        app.select(PatternId::Facade, now + ms(5_000));
        match app.demo() {
            DemoState::Facade(demo) => {
                assert!(demo.lines().is_empty());
                assert!(!demo.is_busy());
            }
            other => panic!("unexpected demo {:?}", other.pattern()),
        }
    }

    #[test]
    fn test_every_pattern_is_reachable_from_the_sidebar() {
        let (mut app, now) = app_at(PatternId::Singleton);
        let rows = app.navigation().visible_rows().len();
        let mut seen = Vec::new();
        for _ in 0..rows {
            app.handle_key(AppKey::Down, now);
            if let Some(SidebarRow::Pattern(id)) = app.navigation().cursor_row() {
                app.handle_key(AppKey::Enter, now);
                assert_eq!(app.demo().pattern(), id);
                seen.push(id);
            }
        }
        seen.sort();
        assert_eq!(seen, PatternId::ALL.to_vec());
    }
}
