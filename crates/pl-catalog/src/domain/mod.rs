//! Domain types of the catalog.

mod category;
mod icon;
mod pattern;

pub use category::{Accent, Category};
pub use icon::Icon;
pub use pattern::{PatternEntry, PatternId};
