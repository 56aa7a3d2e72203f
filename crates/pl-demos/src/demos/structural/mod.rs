//! Structural pattern demos.

mod adapter;
mod bridge;
mod composite;
mod decorator;
mod facade;
mod flyweight;
mod proxy;

pub use adapter::{AdapterDemo, AdapterStatus, JsonUserSource, LegacyXmlApi, XmlToJsonAdapter};
pub use bridge::{BridgeDemo, DriverKind, StorageDriver, UserRepository};
pub use composite::{CompositeDemo, FsNode, TreeRow};
pub use decorator::{DataSource, DecoratorDemo};
pub use facade::{DeploymentFacade, FacadeDemo};
pub use flyweight::{FlyweightDemo, Particle, Texture, TextureFactory};
pub use proxy::{ProxyDemo, RequestRecord, RequestStatus};
