//! # Pattern Catalog Crate
//!
//! The immutable table of design patterns rendered by PatternLabs.
//!
//! ## Design Principles
//!
//! - **Static**: every entry is compiled into the binary and never mutated.
//! - **Total lookup**: a [`PatternId`] always resolves to exactly one
//!   [`PatternEntry`], so the metadata panel has no failure path.
//! - **Stable keys**: the string form of each id (`singleton`,
//!   `chain_of_responsibility`, ...) is what the CLI accepts and what the
//!   canvas address shows.

pub mod catalog;
pub mod domain;
pub mod errors;

pub use catalog::{by_category, entries, lookup};
pub use domain::{Accent, Category, Icon, PatternEntry, PatternId};
pub use errors::CatalogError;
