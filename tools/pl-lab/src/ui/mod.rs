//! UI module - TUI rendering components.
//!
//! The UI follows a component-based architecture:
//! - `layout.rs`: Main layout orchestration
//! - `left_panel.rs`: Category sidebar
//! - `right_panel.rs`: Pattern metadata + demo canvas
//! - `widgets/`: Reusable UI components
//! - `demos/`: Per-pattern canvas renderers

mod layout;
mod left_panel;
mod right_panel;

pub mod demos;
pub mod widgets;

pub use layout::{render, NARROW_WIDTH, SIDEBAR_WIDTH};
