//! Cross-crate integration tests.

pub mod demo_scenarios;
pub mod navigation_flows;
pub mod rendering;

use std::time::{Duration, Instant};

use pl_catalog::PatternId;
use pl_lab::{App, AppKey};

/// Shell with `initial` mounted and a fixed seed.
pub fn app_at(initial: PatternId) -> (App, Instant) {
    let now = Instant::now();
    (App::new(initial, now, 42), now)
}

/// Press each character of `keys` in order.
pub fn press(app: &mut App, keys: &str, now: Instant) {
    for c in keys.chars() {
        app.handle_key(AppKey::Char(c), now);
    }
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
