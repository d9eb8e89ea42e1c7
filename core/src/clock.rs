//! Time sources for bucket rotation
//!
//! Windows never read the wall clock. Every reading is a monotonic offset
//! from the clock's own anchor, which keeps NTP adjustments from moving a
//! window backwards and lets tests drive time by hand.

use parking_lot::Mutex;
use std::fmt::Debug;
use std::time::{Duration, Instant};

/// Monotonic time source consulted on every write
pub trait Clock: Send + Sync + Debug {
    /// Time elapsed since this clock's anchor
    fn now(&self) -> Duration;
}

/// Real time, anchored at construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start_time: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Hand-driven clock for deterministic tests
///
/// Starts at zero and only moves when told to. Share it through an `Arc`
/// so the test keeps a handle after passing it to a window.
///
/// ```rust
/// use breaker_window::{ManualClock, RollingWindow};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let clock = Arc::new(ManualClock::new());
/// let window = RollingWindow::builder()
///     .clock(clock.clone())
///     .build()
///     .unwrap();
///
/// window.record_failure();
/// clock.advance(Duration::from_secs(2));
/// window.record_success();
///
/// assert_eq!(window.failures(), 1);
/// assert_eq!(window.successes(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now = now.saturating_add(by);
    }

    /// Jump to an absolute offset, backwards included
    pub fn set(&self, at: Duration) {
        *self.now.lock() = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock()
    }
}
