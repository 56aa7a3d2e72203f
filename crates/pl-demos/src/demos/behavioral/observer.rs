//! Observer: a metrics subject broadcasting to three dashboards.

use std::fmt;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome};

/// CPU percentage above which the alert system raises HIGH LOAD.
pub const HIGH_LOAD_THRESHOLD: u32 = 70;

const CONTROLS: &[Control] = &[Control::new("u", "Update")];

/// Subject state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub cpu: u32,
    pub ram: u32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self { cpu: 10, ram: 20 }
    }
}

/// What an observer currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ObserverView {
    Cpu { cpu: u32, bars: [f64; 3] },
    Log { lines: Vec<String> },
    Alert { high_load: bool },
}

pub trait MetricsObserver: fmt::Debug {
    fn name(&self) -> &'static str;

    fn notify(&mut self, metrics: Metrics);

    fn view(&self) -> ObserverView;
}

#[derive(Debug, Default)]
pub struct CpuMonitor {
    cpu: u32,
}

impl MetricsObserver for CpuMonitor {
    fn name(&self) -> &'static str {
        "CPU Monitor"
    }

    fn notify(&mut self, metrics: Metrics) {
        self.cpu = metrics.cpu;
    }

    fn view(&self) -> ObserverView {
        let cpu = f64::from(self.cpu);
        ObserverView::Cpu {
            cpu: self.cpu,
            bars: [cpu, cpu * 0.7, cpu * 0.4],
        }
    }
}

#[derive(Debug, Default)]
pub struct LogStream {
    latest: Metrics,
}

impl MetricsObserver for LogStream {
    fn name(&self) -> &'static str {
        "Log Stream"
    }

    fn notify(&mut self, metrics: Metrics) {
        self.latest = metrics;
    }

    fn view(&self) -> ObserverView {
        ObserverView::Log {
            lines: vec![
                "sys.chk OK".to_string(),
                format!("ram: {}GB", self.latest.ram),
                format!("cpu: {}%", self.latest.cpu),
            ],
        }
    }
}

#[derive(Debug, Default)]
pub struct AlertSystem {
    high_load: bool,
}

impl MetricsObserver for AlertSystem {
    fn name(&self) -> &'static str {
        "Alert System"
    }

    fn notify(&mut self, metrics: Metrics) {
        self.high_load = metrics.cpu > HIGH_LOAD_THRESHOLD;
    }

    fn view(&self) -> ObserverView {
        ObserverView::Alert {
            high_load: self.high_load,
        }
    }
}

#[derive(Debug)]
pub struct ObserverDemo {
    metrics: Metrics,
    observers: Vec<Box<dyn MetricsObserver>>,
    rng: StdRng,
}

impl ObserverDemo {
    pub fn new(rng: StdRng) -> Self {
        let mut demo = Self {
            metrics: Metrics::default(),
            observers: vec![
                Box::new(CpuMonitor::default()),
                Box::new(LogStream::default()),
                Box::new(AlertSystem::default()),
            ],
            rng,
        };
        demo.publish(Metrics::default());
        demo
    }

    /// Store new metrics and notify every subscriber.
    pub fn publish(&mut self, metrics: Metrics) {
        self.metrics = metrics;
        for observer in &mut self.observers {
            observer.notify(metrics);
        }
    }

    /// Publish a random reading: cpu 10..=89, ram 20..=79.
    pub fn update(&mut self) -> Metrics {
        let metrics = Metrics {
            cpu: self.rng.gen_range(10..=89),
            ram: self.rng.gen_range(20..=79),
        };
        self.publish(metrics);
        metrics
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn observers(&self) -> &[Box<dyn MetricsObserver>] {
        &self.observers
    }
}

impl Demo for ObserverDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('u') => {
                self.update();
                InputOutcome::Consumed
            }
            _ => InputOutcome::Ignored,
        }
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Click Update to notify all observers instantly"
    }
}
