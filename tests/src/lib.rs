//! # PatternLabs Test Suite
//!
//! Unified test crate for behaviour that spans crates.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/
//! │   └── demo_benchmarks.rs  # Mount, tick and full-frame render cost
//! └── src/integration/
//!     ├── navigation_flows.rs # Sidebar, switching, teardown
//!     ├── demo_scenarios.rs   # Timed demos driven through the shell
//!     └── rendering.rs        # Frames drawn into a TestBackend
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p pl-tests
//!
//! # By area
//! cargo test -p pl-tests integration::rendering::
//!
//! # Benchmarks
//! cargo bench -p pl-tests
//! ```

#![allow(dead_code)]

pub mod integration;
