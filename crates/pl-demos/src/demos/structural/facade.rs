//! Facade: one `deploy()` call sequencing several subsystems.

use std::time::{Duration, Instant};

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome, TimerQueue};

const CONTROLS: &[Control] = &[Control::new("d", "DEPLOY")];

/// Subsystem steps with their offset from the start of a deployment.
const STEPS: &[(u64, &str)] = &[
    (0, "> Initializing deployment..."),
    (500, "> Compiling assets (Webpack)..."),
    (1300, "> Running tests (Jest)... PASS"),
    (1900, "> Uploading to S3..."),
    (2500, "> CloudFront Invalidation..."),
    (2900, "> DEPLOYMENT SUCCESSFUL ✅"),
];

/// Single entry point hiding compiler, test runner, uploader and CDN.
#[derive(Debug, Default)]
pub struct DeploymentFacade;

impl DeploymentFacade {
    /// Schedule every subsystem step; returns how many were queued.
    pub fn deploy(&self, timers: &mut TimerQueue<&'static str>, now: Instant) -> usize {
        for (offset, line) in STEPS {
            timers.schedule(now, Duration::from_millis(*offset), *line);
        }
        STEPS.len()
    }

    pub fn final_line() -> &'static str {
        STEPS[STEPS.len() - 1].1
    }
}

#[derive(Debug, Default)]
pub struct FacadeDemo {
    facade: DeploymentFacade,
    lines: Vec<&'static str>,
    busy: bool,
    timers: TimerQueue<&'static str>,
}

impl FacadeDemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a deployment. Ignored while one is already running.
    pub fn deploy(&mut self, now: Instant) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.lines.clear();
        self.facade.deploy(&mut self.timers, now);
        true
    }

    pub fn lines(&self) -> &[&'static str] {
        &self.lines
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

impl Demo for FacadeDemo {
    fn handle(&mut self, input: DemoInput, now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('d') => {
                self.deploy(now);
                InputOutcome::Consumed
            }
            _ => InputOutcome::Ignored,
        }
    }

    fn tick(&mut self, now: Instant) -> usize {
        let due = self.timers.drain_due(now);
        let fired = due.len();
        for line in due {
            self.lines.push(line);
            if line == DeploymentFacade::final_line() {
                self.busy = false;
            }
        }
        fired
    }

    fn teardown(&mut self) -> usize {
        self.busy = false;
        self.timers.cancel_all()
    }

    fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Click DEPLOY to trigger complex subsystem logic"
    }
}
