//! # Demo Scenarios
//!
//! Demos driven end to end through the shell: keys enter via
//! `App::handle_key`, time advances via `App::tick`, and the assertions
//! read the mounted demo's state.

#[cfg(test)]
mod tests {
    use pl_catalog::PatternId;
    use pl_demos::demos::structural::RequestStatus;
    use pl_demos::DemoState;
    use pl_lab::{App, AppKey};

    use crate::integration::{app_at, ms, press};

    // =============================================================================
    // TIMED DEMOS
    // =============================================================================

    #[test]
    fn test_chain_escalates_critical_bug_step_by_step() {
        let (mut app, t0) = app_at(PatternId::ChainOfResponsibility);
        press(&mut app, "3", t0);

        app.tick(t0);
        let first = chain_titles(&app);
        assert_eq!(first, vec!["Bot Agent".to_string()]);

        app.tick(t0 + ms(1_600));
        let all = chain_titles(&app);
        assert_eq!(all, vec!["Bot Agent", "Junior Agent", "Senior Agent"]);
    }

    #[test]
    fn test_chain_new_ticket_replaces_pending_steps() {
        let (mut app, t0) = app_at(PatternId::ChainOfResponsibility);
        press(&mut app, "3", t0);
        app.tick(t0);

        press(&mut app, "1", t0 + ms(100));
        app.tick(t0 + ms(5_000));
        assert_eq!(chain_titles(&app), vec!["Bot Agent".to_string()]);
    }

    #[test]
    fn test_proxy_blocks_fourth_request_then_recovers() {
        let (mut app, t0) = app_at(PatternId::Proxy);
        press(&mut app, "sss", t0);
        press(&mut app, "s", t0 + ms(10));

        let DemoState::Proxy(demo) = app.demo() else {
            panic!("proxy demo not mounted");
        };
        assert!(demo.is_blocked());
        let newest = demo.log().next().map(|r| r.status);
        assert_eq!(newest, Some(RequestStatus::Blocked));

        app.tick(t0 + ms(600));
        let DemoState::Proxy(demo) = app.demo() else {
            panic!("proxy demo not mounted");
        };
        assert!(!demo.is_blocked());
    }

    #[test]
    fn test_facade_deploy_runs_to_completion() {
        let (mut app, t0) = app_at(PatternId::Facade);
        press(&mut app, "d", t0);
        // A second deploy while busy is ignored.
        press(&mut app, "d", t0 + ms(100));

        app.tick(t0 + ms(3_000));
        let DemoState::Facade(demo) = app.demo() else {
            panic!("facade demo not mounted");
        };
        assert_eq!(demo.lines().len(), 6);
        assert!(!demo.is_busy());
        assert_eq!(app.demo().pending_timers(), 0);
    }

    // =============================================================================
    // TEXT INPUT
    // =============================================================================

    #[test]
    fn test_memento_editing_captures_shell_keys() {
        let (mut app, now) = app_at(PatternId::Memento);
        press(&mut app, "e", now);
        assert!(app.demo().is_editing());

        // 'q' and '?' are text while editing.
        press(&mut app, "q?", now);
        assert!(!app.should_quit());
        app.handle_key(AppKey::Enter, now);
        assert!(!app.demo().is_editing());

        let DemoState::Memento(demo) = app.demo() else {
            panic!("memento demo not mounted");
        };
        assert_eq!(demo.text(), "Version 1q?");

        press(&mut app, "q", now);
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let (mut app, now) = app_at(PatternId::Memento);
        press(&mut app, "e", now);
        app.handle_key(AppKey::CtrlC, now);
        assert!(app.should_quit());
    }

    #[test]
    fn test_memento_restores_snapshot_twelve_through_shell() {
        let (mut app, now) = app_at(PatternId::Memento);
        press(&mut app, &"s".repeat(11), now);

        // Twelfth snapshot holds distinct text.
        press(&mut app, "e", now);
        press(&mut app, "!", now);
        app.handle_key(AppKey::Enter, now);
        press(&mut app, "s", now);
        press(&mut app, "3", now);

        // Enter goes to the restore field, not the sidebar.
        press(&mut app, "r12", now);
        app.handle_key(AppKey::Enter, now);
        assert_eq!(app.active(), PatternId::Memento);

        let DemoState::Memento(demo) = app.demo() else {
            panic!("memento demo not mounted");
        };
        assert_eq!(demo.caretaker().len(), 12);
        assert_eq!(demo.text(), "Version 1!");
    }

    // =============================================================================
    // SEEDING
    // =============================================================================

    #[test]
    fn test_same_seed_gives_same_metrics() {
        let run = || {
            let (mut app, now) = app_at(PatternId::Singleton);
            app.select(PatternId::Observer, now);
            press(&mut app, "uuu", now);
            match app.demo() {
                DemoState::Observer(demo) => demo.metrics(),
                other => panic!("unexpected demo {:?}", other.pattern()),
            }
        };
        assert_eq!(run(), run());
    }

    fn chain_titles(app: &App) -> Vec<String> {
        match app.demo() {
            DemoState::ChainOfResponsibility(demo) => {
                demo.log().iter().map(|step| step.title()).collect()
            }
            other => panic!("unexpected demo {:?}", other.pattern()),
        }
    }
}
