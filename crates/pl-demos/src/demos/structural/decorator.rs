//! Decorator: compression and encryption layers wrapped around a payload.

use std::time::{Duration, Instant};

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome, TimerId, TimerQueue};

const PROCESSING_TIME: Duration = Duration::from_millis(300);

const CONTROLS: &[Control] = &[
    Control::new("c", "Toggle Compression"),
    Control::new("e", "Toggle Encryption"),
];

/// Component interface shared by the payload and every layer.
pub trait DataSource {
    fn read(&self) -> String;
}

struct PlainData;

struct CompressionDecorator {
    inner: Box<dyn DataSource>,
}

struct EncryptionDecorator {
    inner: Box<dyn DataSource>,
}

impl DataSource for PlainData {
    fn read(&self) -> String {
        "data".to_string()
    }
}

impl DataSource for CompressionDecorator {
    fn read(&self) -> String {
        format!("%{}", self.inner.read())
    }
}

impl DataSource for EncryptionDecorator {
    fn read(&self) -> String {
        format!("#{}", self.inner.read())
    }
}

/// Wrap the payload: encryption innermost, compression outermost.
fn compose(compress: bool, encrypt: bool) -> Box<dyn DataSource> {
    let mut source: Box<dyn DataSource> = Box::new(PlainData);
    if encrypt {
        source = Box::new(EncryptionDecorator { inner: source });
    }
    if compress {
        source = Box::new(CompressionDecorator { inner: source });
    }
    source
}

#[derive(Debug)]
pub struct DecoratorDemo {
    compress: bool,
    encrypt: bool,
    output: String,
    processing: Option<TimerId>,
    timers: TimerQueue<()>,
}

impl DecoratorDemo {
    /// Mounting counts as a layer change, so the first frame shows processing.
    pub fn new(now: Instant) -> Self {
        let mut demo = Self {
            compress: true,
            encrypt: true,
            output: String::new(),
            processing: None,
            timers: TimerQueue::new(),
        };
        demo.rebuild(now);
        demo
    }

    fn rebuild(&mut self, now: Instant) {
        self.output = compose(self.compress, self.encrypt).read();
        if let Some(previous) = self.processing.take() {
            self.timers.cancel(previous);
        }
        self.processing = Some(self.timers.schedule(now, PROCESSING_TIME, ()));
    }

    pub fn toggle_compression(&mut self, now: Instant) {
        self.compress = !self.compress;
        self.rebuild(now);
    }

    pub fn toggle_encryption(&mut self, now: Instant) {
        self.encrypt = !self.encrypt;
        self.rebuild(now);
    }

    pub fn compression(&self) -> bool {
        self.compress
    }

    pub fn encryption(&self) -> bool {
        self.encrypt
    }

    /// Final payload after every active layer.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_processing(&self) -> bool {
        self.processing.is_some()
    }
}

impl Demo for DecoratorDemo {
    fn handle(&mut self, input: DemoInput, now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('c') => self.toggle_compression(now),
            DemoInput::Key('e') => self.toggle_encryption(now),
            _ => return InputOutcome::Ignored,
        }
        InputOutcome::Consumed
    }

    fn tick(&mut self, now: Instant) -> usize {
        let fired = self.timers.drain_due(now).len();
        if fired > 0 {
            self.processing = None;
        }
        fired
    }

    fn teardown(&mut self) -> usize {
        self.processing = None;
        self.timers.cancel_all()
    }

    fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Toggle buttons to wrap data in new layers"
    }
}
