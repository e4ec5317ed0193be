//! Games the engine is tested against.
//!
//! The engine implements no rules itself, so these stand in for the external board engine.

#![allow(dead_code, unused_imports)]

mod board;

pub use board::*;
pub use tree::*;

use std::time::Duration;

/// Installs a test logger once. Set `RUST_LOG=debug` to see search progress.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A probe that never runs out of time.
pub fn unlimited() -> Duration {
    Duration::from_secs(3600)
}
