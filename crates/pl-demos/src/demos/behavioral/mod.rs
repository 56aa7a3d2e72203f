//! Behavioral pattern demos.

mod chain;
mod command;
mod iterator;
mod mediator;
mod memento;
mod observer;
mod state;
mod strategy;
mod template_method;
mod visitor;

pub use chain::{ChainDemo, ChainStep, Handler, Ticket};
pub use command::{Account, CommandDemo, TxCommand};
pub use iterator::{IteratorDemo, Playlist, PlaylistIterator};
pub use mediator::{ChatHub, ChatMessage, MediatorDemo};
pub use memento::{Caretaker, MementoDemo, Snapshot};
pub use observer::{
    AlertSystem, CpuMonitor, LogStream, Metrics, MetricsObserver, ObserverDemo, ObserverView,
};
pub use state::{Connection, StateDemo, TcpState};
pub use strategy::{Balancer, Server, StrategyDemo, StrategyKind};
pub use template_method::{JavaPipeline, NodePipeline, Pipeline, PipelineKind, TemplateMethodDemo};
pub use visitor::{JsonExportVisitor, Shape, ShapeVisitor, VisitorDemo, XmlExportVisitor};
