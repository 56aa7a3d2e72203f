//! Reusable UI components.

mod help_overlay;

pub use help_overlay::{centered_rect, render_help_overlay};
