//! Building blocks shared by the demos.

mod bounded_log;
mod input;
mod sliding_window;
mod text_field;
mod timers;

pub use bounded_log::{BoundedLog, LogOrder};
pub use input::{Control, DemoInput, InputOutcome};
pub use sliding_window::{presets, Admission, SlidingWindow};
pub use text_field::TextField;
pub use timers::{TimerId, TimerQueue};
