//! Pattern identifiers and catalog entries.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{Category, Icon};
use crate::errors::CatalogError;

/// Stable identifier of a design pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternId {
    Singleton,
    Factory,
    AbstractFactory,
    Builder,
    Prototype,
    Adapter,
    Bridge,
    Composite,
    Decorator,
    Facade,
    Flyweight,
    Proxy,
    ChainOfResponsibility,
    Command,
    Iterator,
    Mediator,
    Memento,
    Observer,
    State,
    Strategy,
    TemplateMethod,
    Visitor,
}

impl PatternId {
    /// All pattern ids in catalog order.
    pub const ALL: [PatternId; 22] = [
        PatternId::Singleton,
        PatternId::Factory,
        PatternId::AbstractFactory,
        PatternId::Builder,
        PatternId::Prototype,
        PatternId::Adapter,
        PatternId::Bridge,
        PatternId::Composite,
        PatternId::Decorator,
        PatternId::Facade,
        PatternId::Flyweight,
        PatternId::Proxy,
        PatternId::ChainOfResponsibility,
        PatternId::Command,
        PatternId::Iterator,
        PatternId::Mediator,
        PatternId::Memento,
        PatternId::Observer,
        PatternId::State,
        PatternId::Strategy,
        PatternId::TemplateMethod,
        PatternId::Visitor,
    ];

    /// The pattern shown when nothing else was requested.
    pub const DEFAULT: PatternId = PatternId::Singleton;

    /// The stable string key (`abstract_factory`, `visitor`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternId::Singleton => "singleton",
            PatternId::Factory => "factory",
            PatternId::AbstractFactory => "abstract_factory",
            PatternId::Builder => "builder",
            PatternId::Prototype => "prototype",
            PatternId::Adapter => "adapter",
            PatternId::Bridge => "bridge",
            PatternId::Composite => "composite",
            PatternId::Decorator => "decorator",
            PatternId::Facade => "facade",
            PatternId::Flyweight => "flyweight",
            PatternId::Proxy => "proxy",
            PatternId::ChainOfResponsibility => "chain_of_responsibility",
            PatternId::Command => "command",
            PatternId::Iterator => "iterator",
            PatternId::Mediator => "mediator",
            PatternId::Memento => "memento",
            PatternId::Observer => "observer",
            PatternId::State => "state",
            PatternId::Strategy => "strategy",
            PatternId::TemplateMethod => "template_method",
            PatternId::Visitor => "visitor",
        }
    }

    /// Category the pattern belongs to.
    pub fn category(&self) -> Category {
        match self {
            PatternId::Singleton
            | PatternId::Factory
            | PatternId::AbstractFactory
            | PatternId::Builder
            | PatternId::Prototype => Category::Creational,
            PatternId::Adapter
            | PatternId::Bridge
            | PatternId::Composite
            | PatternId::Decorator
            | PatternId::Facade
            | PatternId::Flyweight
            | PatternId::Proxy => Category::Structural,
            PatternId::ChainOfResponsibility
            | PatternId::Command
            | PatternId::Iterator
            | PatternId::Mediator
            | PatternId::Memento
            | PatternId::Observer
            | PatternId::State
            | PatternId::Strategy
            | PatternId::TemplateMethod
            | PatternId::Visitor => Category::Behavioral,
        }
    }

    /// Catalog entry of this pattern.
    pub fn entry(&self) -> &'static PatternEntry {
        crate::catalog::lookup(*self)
    }

    /// Display title, shortcut for `entry().title`.
    pub fn title(&self) -> &'static str {
        self.entry().title
    }

    /// Position in [`PatternId::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "singleton" => Ok(PatternId::Singleton),
            "factory" => Ok(PatternId::Factory),
            "abstract_factory" => Ok(PatternId::AbstractFactory),
            "builder" => Ok(PatternId::Builder),
            "prototype" => Ok(PatternId::Prototype),
            "adapter" => Ok(PatternId::Adapter),
            "bridge" => Ok(PatternId::Bridge),
            "composite" => Ok(PatternId::Composite),
            "decorator" => Ok(PatternId::Decorator),
            "facade" => Ok(PatternId::Facade),
            "flyweight" => Ok(PatternId::Flyweight),
            "proxy" => Ok(PatternId::Proxy),
            "chain_of_responsibility" => Ok(PatternId::ChainOfResponsibility),
            "command" => Ok(PatternId::Command),
            "iterator" => Ok(PatternId::Iterator),
            "mediator" => Ok(PatternId::Mediator),
            "memento" => Ok(PatternId::Memento),
            "observer" => Ok(PatternId::Observer),
            "state" => Ok(PatternId::State),
            "strategy" => Ok(PatternId::Strategy),
            "template_method" => Ok(PatternId::TemplateMethod),
            "visitor" => Ok(PatternId::Visitor),
            other => Err(CatalogError::UnknownPattern(other.to_string())),
        }
    }
}

/// Descriptive metadata of a single pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternEntry {
    pub id: PatternId,
    pub category: Category,
    pub title: &'static str,
    pub icon: Icon,
    /// What the pattern is.
    pub what: &'static str,
    /// How it is implemented.
    pub how: &'static str,
    /// Why it is used.
    pub why: &'static str,
    /// A concrete real-world scenario.
    pub scenario: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_key() {
        for id in PatternId::ALL {
            assert_eq!(id.as_str().parse::<PatternId>(), Ok(id));
        }
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "singletons".parse::<PatternId>().unwrap_err();
        assert_eq!(err, CatalogError::UnknownPattern("singletons".to_string()));
        assert!(err.to_string().contains("singletons"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" proxy ".parse::<PatternId>(), Ok(PatternId::Proxy));
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, id) in PatternId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_category_counts() {
        let count = |c: Category| PatternId::ALL.iter().filter(|id| id.category() == c).count();
        assert_eq!(count(Category::Creational), 5);
        assert_eq!(count(Category::Structural), 7);
        assert_eq!(count(Category::Behavioral), 10);
    }

    #[test]
    fn test_serializes_as_key() {
        let json = serde_json::to_string(&PatternId::ChainOfResponsibility).unwrap();
        assert_eq!(json, "\"chain_of_responsibility\"");
    }
}
