//! Factory Method: payment processors created from a requested kind.

use std::time::Instant;

use crate::demos::Demo;
use crate::domain::{BoundedLog, Control, DemoInput, InputOutcome, LogOrder};

const HEAP_CAPACITY: usize = 5;

const CONTROLS: &[Control] = &[
    Control::new("1", "Credit Card"),
    Control::new("2", "PayPal"),
    Control::new("3", "Bitcoin"),
];

/// What the client asks the factory for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    Stripe,
    PayPal,
    Crypto,
}

impl PaymentKind {
    pub const ALL: [PaymentKind; 3] = [PaymentKind::Stripe, PaymentKind::PayPal, PaymentKind::Crypto];

    /// Label on the client's button.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentKind::Stripe => "Credit Card",
            PaymentKind::PayPal => "PayPal",
            PaymentKind::Crypto => "Bitcoin",
        }
    }
}

/// Product interface. Callers never name the concrete type.
pub trait PaymentProcessor {
    fn kind(&self) -> PaymentKind;
    fn class_name(&self) -> &'static str;
}

struct StripeProcessor;
struct PayPalProcessor;
struct CryptoProcessor;

impl PaymentProcessor for StripeProcessor {
    fn kind(&self) -> PaymentKind {
        PaymentKind::Stripe
    }
    fn class_name(&self) -> &'static str {
        "StripeProcessor"
    }
}

impl PaymentProcessor for PayPalProcessor {
    fn kind(&self) -> PaymentKind {
        PaymentKind::PayPal
    }
    fn class_name(&self) -> &'static str {
        "PayPalProcessor"
    }
}

impl PaymentProcessor for CryptoProcessor {
    fn kind(&self) -> PaymentKind {
        PaymentKind::Crypto
    }
    fn class_name(&self) -> &'static str {
        "CryptoProcessor"
    }
}

/// The factory method.
pub fn create_processor(kind: PaymentKind) -> Box<dyn PaymentProcessor> {
    match kind {
        PaymentKind::Stripe => Box::new(StripeProcessor),
        PaymentKind::PayPal => Box::new(PayPalProcessor),
        PaymentKind::Crypto => Box::new(CryptoProcessor),
    }
}

/// An object that landed on the heap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorRecord {
    pub seq: u64,
    pub kind: PaymentKind,
    pub class_name: &'static str,
}

#[derive(Debug)]
pub struct FactoryDemo {
    heap: BoundedLog<ProcessorRecord>,
    next_seq: u64,
}

impl Default for FactoryDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl FactoryDemo {
    pub fn new() -> Self {
        Self {
            heap: BoundedLog::new(HEAP_CAPACITY, LogOrder::NewestFirst),
            next_seq: 1,
        }
    }

    pub fn create(&mut self, kind: PaymentKind) {
        let processor = create_processor(kind);
        self.heap.push(ProcessorRecord {
            seq: self.next_seq,
            kind: processor.kind(),
            class_name: processor.class_name(),
        });
        self.next_seq += 1;
    }

    /// Created objects, newest first.
    pub fn heap(&self) -> &BoundedLog<ProcessorRecord> {
        &self.heap
    }
}

impl Demo for FactoryDemo {
    fn handle(&mut self, input: DemoInput, _now: Instant) -> InputOutcome {
        let kind = match input {
            DemoInput::Key('1') => PaymentKind::Stripe,
            DemoInput::Key('2') => PaymentKind::PayPal,
            DemoInput::Key('3') => PaymentKind::Crypto,
            _ => return InputOutcome::Ignored,
        };
        self.create(kind);
        InputOutcome::Consumed
    }

    fn controls(&self) -> &'static [Control] {
        CONTROLS
    }

    fn hint(&self) -> &'static str {
        "Select a payment type to instantiate"
    }
}
