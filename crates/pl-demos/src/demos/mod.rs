//! Demo registry.
//!
//! [`DemoState`] owns exactly one demo. [`DemoState::mount`] builds the fresh
//! initial state for a pattern, and the UI renders it by matching on the
//! variant.

pub mod behavioral;
pub mod creational;
pub mod structural;

use std::time::Instant;

use pl_catalog::PatternId;
use pl_telemetry::log_demo_event;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::{Control, DemoInput, InputOutcome};

use behavioral::{
    ChainDemo, CommandDemo, IteratorDemo, MediatorDemo, MementoDemo, ObserverDemo, StateDemo,
    StrategyDemo, TemplateMethodDemo, VisitorDemo,
};
use creational::{AbstractFactoryDemo, BuilderDemo, FactoryDemo, PrototypeDemo, SingletonDemo};
use structural::{
    AdapterDemo, BridgeDemo, CompositeDemo, DecoratorDemo, FacadeDemo, FlyweightDemo, ProxyDemo,
};

/// Behaviour shared by every demo.
pub trait Demo {
    /// React to a key press.
    fn handle(&mut self, input: DemoInput, now: Instant) -> InputOutcome;

    /// Fire due timers. Returns how many fired.
    fn tick(&mut self, _now: Instant) -> usize {
        0
    }

    /// Cancel all pending timers. Returns how many were cancelled.
    fn teardown(&mut self) -> usize {
        0
    }

    fn pending_timers(&self) -> usize {
        0
    }

    /// Key legend.
    fn controls(&self) -> &'static [Control];

    /// One-line usage hint.
    fn hint(&self) -> &'static str;

    /// Whether the demo is capturing text input.
    fn is_editing(&self) -> bool {
        false
    }
}

macro_rules! demo_registry {
    ($($variant:ident($demo:ty)),* $(,)?) => {
        /// The mounted demo, one variant per pattern.
        #[derive(Debug)]
        pub enum DemoState {
            $($variant($demo),)*
        }

        impl DemoState {
            /// Pattern this demo illustrates.
            pub fn pattern(&self) -> PatternId {
                match self {
                    $(DemoState::$variant(_) => PatternId::$variant,)*
                }
            }

            fn as_demo(&self) -> &dyn Demo {
                match self {
                    $(DemoState::$variant(demo) => demo,)*
                }
            }

            fn as_demo_mut(&mut self) -> &mut dyn Demo {
                match self {
                    $(DemoState::$variant(demo) => demo,)*
                }
            }
        }
    };
}

demo_registry! {
    Singleton(SingletonDemo),
    Factory(FactoryDemo),
    AbstractFactory(AbstractFactoryDemo),
    Builder(BuilderDemo),
    Prototype(PrototypeDemo),
    Adapter(AdapterDemo),
    Bridge(BridgeDemo),
    Composite(CompositeDemo),
    Decorator(DecoratorDemo),
    Facade(FacadeDemo),
    Flyweight(FlyweightDemo),
    Proxy(ProxyDemo),
    ChainOfResponsibility(ChainDemo),
    Command(CommandDemo),
    Iterator(IteratorDemo),
    Mediator(MediatorDemo),
    Memento(MementoDemo),
    Observer(ObserverDemo),
    State(StateDemo),
    Strategy(StrategyDemo),
    TemplateMethod(TemplateMethodDemo),
    Visitor(VisitorDemo),
}

impl DemoState {
    /// Build the fresh initial state of a pattern's demo.
    ///
    /// `seed` drives every random choice the demo makes later on.
    pub fn mount(id: PatternId, now: Instant, seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        let demo = match id {
            PatternId::Singleton => DemoState::Singleton(SingletonDemo::new(rng)),
            PatternId::Factory => DemoState::Factory(FactoryDemo::new()),
            PatternId::AbstractFactory => DemoState::AbstractFactory(AbstractFactoryDemo::new()),
            PatternId::Builder => DemoState::Builder(BuilderDemo::new()),
            PatternId::Prototype => DemoState::Prototype(PrototypeDemo::new(rng)),
            PatternId::Adapter => DemoState::Adapter(AdapterDemo::new()),
            PatternId::Bridge => DemoState::Bridge(BridgeDemo::new()),
            PatternId::Composite => DemoState::Composite(CompositeDemo::new()),
            PatternId::Decorator => DemoState::Decorator(DecoratorDemo::new(now)),
            PatternId::Facade => DemoState::Facade(FacadeDemo::new()),
            PatternId::Flyweight => DemoState::Flyweight(FlyweightDemo::new(rng)),
            PatternId::Proxy => DemoState::Proxy(ProxyDemo::new()),
            PatternId::ChainOfResponsibility => DemoState::ChainOfResponsibility(ChainDemo::new()),
            PatternId::Command => DemoState::Command(CommandDemo::new()),
            PatternId::Iterator => DemoState::Iterator(IteratorDemo::new()),
            PatternId::Mediator => DemoState::Mediator(MediatorDemo::new()),
            PatternId::Memento => DemoState::Memento(MementoDemo::new()),
            PatternId::Observer => DemoState::Observer(ObserverDemo::new(rng)),
            PatternId::State => DemoState::State(StateDemo::new()),
            PatternId::Strategy => DemoState::Strategy(StrategyDemo::new(rng)),
            PatternId::TemplateMethod => DemoState::TemplateMethod(TemplateMethodDemo::new()),
            PatternId::Visitor => DemoState::Visitor(VisitorDemo::new()),
        };
        log_demo_event!(debug, id, "Demo mounted", seed = seed);
        demo
    }

    pub fn handle(&mut self, input: DemoInput, now: Instant) -> InputOutcome {
        self.as_demo_mut().handle(input, now)
    }

    pub fn tick(&mut self, now: Instant) -> usize {
        self.as_demo_mut().tick(now)
    }

    /// Cancel pending timers ahead of unmounting.
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.as_demo_mut().teardown();
        log_demo_event!(debug, self.pattern(), "Demo torn down", cancelled_timers = cancelled);
        cancelled
    }

    pub fn pending_timers(&self) -> usize {
        self.as_demo().pending_timers()
    }

    pub fn controls(&self) -> &'static [Control] {
        self.as_demo().controls()
    }

    pub fn hint(&self) -> &'static str {
        self.as_demo().hint()
    }

    pub fn is_editing(&self) -> bool {
        self.as_demo().is_editing()
    }
}
