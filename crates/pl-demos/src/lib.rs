//! # PatternLabs Demo Engines
//!
//! Each catalog pattern has a small owned state machine that illustrates it.
//! A demo is mounted when its pattern becomes active and torn down when the
//! user navigates away; teardown cancels every pending timer so nothing
//! fires into a dead demo.
//!
//! ## Structure
//!
//! ```text
//! pl-demos/src/
//! ├── domain/        # TimerQueue, BoundedLog, SlidingWindow, TextField, input types
//! └── demos/
//!     ├── mod.rs     # Demo trait + DemoState registry
//!     ├── creational/
//!     ├── structural/
//!     └── behavioral/
//! ```
//!
//! ## Time
//!
//! Nothing in this crate reads the clock. Callers pass `now: Instant` into
//! every operation, which keeps the demos deterministic under test.

pub mod demos;
pub mod domain;

pub use demos::{Demo, DemoState};
pub use domain::{
    Admission, BoundedLog, Control, DemoInput, InputOutcome, LogOrder, SlidingWindow, TextField,
    TimerId, TimerQueue,
};
