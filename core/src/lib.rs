//! BreakerWindow - rolling success/failure counter for circuit breakers
//!
//! This crate provides the statistics a circuit breaker decides on:
//! - A fixed ring of time-bucketed failure/success counters
//! - Lazy bucket rotation driven by writes, never by reads
//! - Thread-safe recording and consistent aggregate queries
//! - Monotonic, injectable time so rotation can be tested deterministically
//!
//! # Example
//!
//! ```rust
//! use breaker_window::RollingWindow;
//! use std::time::Duration;
//!
//! // 10 second window made of ten 1 second buckets
//! let window = RollingWindow::new(Duration::from_secs(10), 10)?;
//!
//! window.record_failure();
//! window.record_success();
//!
//! assert_eq!(window.failures(), 1);
//! assert_eq!(window.successes(), 1);
//! assert_eq!(window.error_rate(), 0.5);
//!
//! window.reset();
//! assert_eq!(window.error_rate(), 0.0);
//! # Ok::<(), breaker_window::WindowError>(())
//! ```

pub mod bucket;
pub mod builder;
pub mod clock;
pub mod config;
pub mod errors;
pub mod recorder;
pub mod window;

pub use bucket::Bucket;
pub use builder::WindowBuilder;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{DEFAULT_BUCKETS, DEFAULT_WINDOW, RotationPolicy, WindowConfig};
pub use errors::WindowError;
pub use recorder::{NullRecorder, OutcomeRecorder};
pub use window::{RollingWindow, WindowSnapshot, rotation_steps};

/// Outcome of a protected operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Success,
    Failure,
}
