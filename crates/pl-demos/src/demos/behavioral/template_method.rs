//! Template Method: a CI pipeline skeleton with stack-specific steps.

use std::time::{Duration, Instant};

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome, TimerQueue};

/// Offsets of the five pipeline steps from the start of a run.
const STEP_OFFSETS_MS: [u64; 5] = [0, 600, 1400, 2200, 2800];

const CONTROLS: &[Control] = &[
    Control::new("n", "Node.js Pipeline"),
    Control::new("j", "Java Pipeline"),
    Control::new("r", "Run Pipeline"),
];

/// The template: `steps` is fixed, `install` and `build` vary.
pub trait Pipeline {
    fn name(&self) -> &'static str;

    fn install(&self) -> &'static str;

    fn build(&self) -> &'static str;

    fn steps(&self) -> [String; 5] {
        [
            "[Common] Cloning Repository...".to_string(),
            self.install().to_string(),
            self.build().to_string(),
            "[Common] Running Unit Tests...".to_string(),
            format!("[System] {} Pipeline Complete ✅", self.name()),
        ]
    }
}

pub struct NodePipeline;

pub struct JavaPipeline;

impl Pipeline for NodePipeline {
    fn name(&self) -> &'static str {
        "Node"
    }

    fn install(&self) -> &'static str {
        "[Node] npm install"
    }

    fn build(&self) -> &'static str {
        "[Node] npm run build (Webpack)"
    }
}

impl Pipeline for JavaPipeline {
    fn name(&self) -> &'static str {
        "Java"
    }

    fn install(&self) -> &'static str {
        "[Java] mvn install"
    }

    fn build(&self) -> &'static str {
        "[Java] mvn package (JAR)"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    Node,
    Java,
}

impl PipelineKind {
    pub fn pipeline(self) -> &'static dyn Pipeline {
        match self {
            PipelineKind::Node => &NodePipeline,
            PipelineKind::Java => &JavaPipeline,
        }
    }

    pub fn name(self) -> &'static str {
        self.pipeline().name()
    }
}

#[derive(Debug)]
struct Step {
    line: String,
    last: bool,
}

#[derive(Debug)]
pub struct TemplateMethodDemo {
    kind: PipelineKind,
    lines: Vec<String>,
    running: bool,
    timers: TimerQueue<Step>,
}

impl Default for TemplateMethodDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateMethodDemo {
    pub fn new() -> Self {
        Self {
            kind: PipelineKind::Node,
            lines: Vec::new(),
            running: false,
            timers: TimerQueue::new(),
        }
    }

    /// Selecting a stack does not affect a run already in progress.
    pub fn select(&mut self, kind: PipelineKind) {
        self.kind = kind;
    }

    pub fn run(&mut self, now: Instant) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.lines.clear();
        let steps = self.kind.pipeline().steps();
        let count = steps.len();
        for (i, (line, offset)) in steps.into_iter().zip(STEP_OFFSETS_MS).enumerate() {
            let step = Step {
                line,
                last: i + 1 == count,
            };
            self.timers.schedule(now, Duration::from_millis(offset), step);
        }
        true
    }

    pub fn kind(&self) -> PipelineKind {
        self.kind
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Demo for TemplateMethodDemo {
    fn handle(&mut self, input: DemoInput, now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('n') => self.select(PipelineKind::Node),
            DemoInput::Key('j') => self.select(PipelineKind::Java),
            DemoInput::Key('r') => {
                self.run(now);
            }
            _ => return InputOutcome::Ignored,
        }
        InputOutcome::Consumed
    }

    fn tick(&mut self, now: Instant) -> usize {
        let due = self.timers.drain_due(now);
        let fired = due.len();
        for step in due {
            if step.last {
                self.running = false;
            }
            self.lines.push(step.line);
        }
        fired
    }

    fn teardown(&mut self) -> usize {
        self.running = false;
        self.timers.cancel_all()
    }

    fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Same Structure, Different Commands"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_java_steps_override_middle_of_template() {
        let steps = PipelineKind::Java.pipeline().steps();
        assert_eq!(steps[0], "[Common] Cloning Repository...");
        assert_eq!(steps[1], "[Java] mvn install");
        assert_eq!(steps[2], "[Java] mvn package (JAR)");
        assert_eq!(steps[4], "[System] Java Pipeline Complete ✅");
    }

    #[test]
    fn test_run_reveals_steps_over_time() {
        let t0 = Instant::now();
        let mut demo = TemplateMethodDemo::new();
        demo.handle(DemoInput::Key('r'), t0);
        demo.tick(t0 + ms(600));
        assert_eq!(demo.lines(), &["[Common] Cloning Repository...", "[Node] npm install"]);

        demo.tick(t0 + ms(2799));
        assert!(demo.is_running());
        demo.tick(t0 + ms(2800));
        assert!(!demo.is_running());
        assert_eq!(demo.lines().len(), 5);
    }

    #[test]
    fn test_switching_stack_mid_run_keeps_current_run() {
        let t0 = Instant::now();
        let mut demo = TemplateMethodDemo::new();
        demo.run(t0);
        demo.handle(DemoInput::Key('j'), t0 + ms(100));
        assert!(!demo.run(t0 + ms(200)));

        demo.tick(t0 + ms(3000));
        assert_eq!(demo.lines()[4], "[System] Node Pipeline Complete ✅");
        assert_eq!(demo.kind(), PipelineKind::Java);
    }
}
