//! Time Management
//!
//! The engine never owns a clock. The harness hands every move selection a probe
//! that reports the time left for the move, and the search polls it on each node.

use std::time::{Duration, Instant};

use crate::error::{self, ErrorKind};

/// Remaining time probe supplied by the harness.
pub type TimeLeft<'a> = &'a dyn Fn() -> Duration;

/// Timer pairs a remaining time probe with the threshold below which a search must stop.
#[derive(Copy, Clone)]
pub struct Timer<'a> {
    time_left: TimeLeft<'a>,
    threshold: Duration,
}

impl<'a> Timer<'a> {
    pub fn new(time_left: TimeLeft<'a>, threshold: Duration) -> Self {
        Self {
            time_left,
            threshold,
        }
    }

    /// Time left as reported by the probe.
    pub fn remaining(&self) -> Duration {
        (self.time_left)()
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Returns true if the remaining time has dropped below the threshold.
    pub fn is_out_of_time(&self) -> bool {
        self.remaining() < self.threshold
    }

    /// Fails with `SearchTimeout` once the remaining time is below the threshold.
    pub fn check(&self) -> error::Result<()> {
        if self.is_out_of_time() {
            Err(ErrorKind::SearchTimeout.into())
        } else {
            Ok(())
        }
    }
}

/// Returns a probe counting down from `limit`, starting now.
pub fn countdown(limit: Duration) -> impl Fn() -> Duration {
    countdown_from(Instant::now(), limit)
}

/// Returns a probe counting down from `limit`, starting at `start_time`.
/// The probe saturates at zero once the limit has passed.
pub fn countdown_from(start_time: Instant, limit: Duration) -> impl Fn() -> Duration {
    move || limit.saturating_sub(start_time.elapsed())
}
