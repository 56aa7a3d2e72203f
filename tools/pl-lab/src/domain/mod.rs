//! Domain models for the shell.

mod app;
pub mod metadata;
mod navigation;

pub use app::{App, AppKey, AppState};
pub use navigation::{Navigation, Selection, SidebarRow};
