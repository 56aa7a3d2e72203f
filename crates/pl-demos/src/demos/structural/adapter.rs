//! Adapter: a JSON client talks to an XML-only legacy service.

use std::time::{Duration, Instant};

use serde_json::{Map, Value};

use crate::demos::Demo;
use crate::domain::{Control, DemoInput, InputOutcome, TimerQueue};

const CONVERSION_TIME: Duration = Duration::from_millis(1500);
const RESULT_VISIBLE_UNTIL: Duration = Duration::from_millis(3500);

const CONTROLS: &[Control] = &[Control::new("s", "Simulate Request")];

/// The adaptee: speaks XML only.
#[derive(Debug, Default)]
pub struct LegacyXmlApi;

impl LegacyXmlApi {
    pub fn fetch_user(&self, id: u32) -> String {
        format!("<user id=\"{id}\"/>")
    }
}

/// Target interface the modern client expects.
pub trait JsonUserSource {
    fn user_json(&self, id: u32) -> Option<String>;
}

/// Wraps the legacy API and translates its payloads.
#[derive(Debug, Default)]
pub struct XmlToJsonAdapter {
    legacy: LegacyXmlApi,
}

impl XmlToJsonAdapter {
    /// Translate a self-closing element into a single-object JSON document.
    ///
    /// Integer attributes become JSON numbers and everything else a JSON
    /// string. Attribute values must be double-quoted and contain no spaces.
    pub fn translate(xml: &str) -> Option<Value> {
        let body = xml.trim().strip_prefix('<')?.strip_suffix("/>")?.trim();
        let (tag, attrs) = body.split_once(char::is_whitespace).unwrap_or((body, ""));
        if tag.is_empty() {
            return None;
        }

        let mut fields = Map::new();
        for attr in attrs.split_whitespace() {
            let (name, value) = attr.split_once('=')?;
            let value = value.strip_prefix('"')?.strip_suffix('"')?;
            let value = match value.parse::<i64>() {
                Ok(number) => Value::from(number),
                Err(_) => Value::from(value),
            };
            fields.insert(name.to_string(), value);
        }

        let mut document = Map::new();
        document.insert(tag.to_string(), Value::Object(fields));
        Some(Value::Object(document))
    }

    pub fn legacy(&self) -> &LegacyXmlApi {
        &self.legacy
    }
}

impl JsonUserSource for XmlToJsonAdapter {
    fn user_json(&self, id: u32) -> Option<String> {
        Self::translate(&self.legacy.fetch_user(id)).map(|document| document.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterStatus {
    Idle,
    Converting,
    Done,
}

#[derive(Debug)]
enum AdapterTimer {
    Converted,
    Reset,
}

#[derive(Debug)]
pub struct AdapterDemo {
    adapter: XmlToJsonAdapter,
    status: AdapterStatus,
    legacy_payload: Option<String>,
    json_payload: Option<String>,
    timers: TimerQueue<AdapterTimer>,
}

impl Default for AdapterDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterDemo {
    pub fn new() -> Self {
        Self {
            adapter: XmlToJsonAdapter::default(),
            status: AdapterStatus::Idle,
            legacy_payload: None,
            json_payload: None,
            timers: TimerQueue::new(),
        }
    }

    /// Start a request. Ignored unless idle.
    pub fn simulate_request(&mut self, now: Instant) -> bool {
        if self.status != AdapterStatus::Idle {
            return false;
        }
        self.status = AdapterStatus::Converting;
        self.legacy_payload = Some(self.adapter.legacy().fetch_user(1));
        self.json_payload = None;
        self.timers.schedule(now, CONVERSION_TIME, AdapterTimer::Converted);
        self.timers.schedule(now, RESULT_VISIBLE_UNTIL, AdapterTimer::Reset);
        true
    }

    pub fn status(&self) -> AdapterStatus {
        self.status
    }

    /// XML read from the legacy service, shown while a request is in flight.
    pub fn legacy_payload(&self) -> Option<&str> {
        self.legacy_payload.as_deref()
    }

    /// Adapted JSON, shown once conversion finished.
    pub fn json_payload(&self) -> Option<&str> {
        self.json_payload.as_deref()
    }
}

impl Demo for AdapterDemo {
    fn handle(&mut self, input: DemoInput, now: Instant) -> InputOutcome {
        match input {
            DemoInput::Key('s') => {
                self.simulate_request(now);
                InputOutcome::Consumed
            }
            _ => InputOutcome::Ignored,
        }
    }

    fn tick(&mut self, now: Instant) -> usize {
        let fired = self.timers.drain_due(now);
        for timer in &fired {
            match timer {
                AdapterTimer::Converted => {
                    self.status = AdapterStatus::Done;
                    self.json_payload = self.adapter.user_json(1);
                }
                AdapterTimer::Reset => {
                    self.status = AdapterStatus::Idle;
                    self.legacy_payload = None;
                    self.json_payload = None;
                }
            }
        }
        fired.len()
    }

    fn teardown(&mut self) -> usize {
        self.timers.cancel_all()
    }

    fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Click 'Simulate Request' to adapt data"
    }
}
