//! Creational pattern demos.

mod abstract_factory;
mod builder;
mod factory;
mod prototype;
mod singleton;

pub use abstract_factory::{AbstractFactoryDemo, Button, Checkbox, Theme, WidgetFactory};
pub use builder::{BuilderDemo, Cpu, Disk, Ram, ServerConfig, ServerConfigBuilder, BUILD_ID};
pub use factory::{create_processor, FactoryDemo, PaymentKind, PaymentProcessor, ProcessorRecord};
pub use prototype::{PrototypeDemo, VirtualMachine, VmKind};
pub use singleton::{ConnectionPool, PoolRequest, SingletonDemo};
