//! PatternLabs: interactive terminal reference for software design patterns.
//!
//! ## Architecture
//!
//! The shell owns navigation state and exactly one mounted demo. Rendering
//! is split per panel, and every pattern has a dedicated canvas renderer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  PatternLabs  Creational                     [?]Help [Q]uit     │
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  PATTERNS              │  Singleton                             │
//! │  ▾ Creational          │  What / How? / Why? / Scenario         │
//! │    ⛁ Singleton         ├────────────────────────────────────────┤
//! │    ▣ Factory           │  simulation://singleton.sim            │
//! │  ▸ Structural          │  (per-pattern canvas)                  │
//! │  ▾ Behavioral          │                                        │
//! └────────────────────────┴────────────────────────────────────────┘
//! │  [1-3] Request from client   [r] Reset memory                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod domain;
pub mod ui;

pub use domain::{App, AppKey, AppState, Navigation, Selection, SidebarRow};
