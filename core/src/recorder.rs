//! Outcome recorders consumed by circuit breaker logic
//!
//! This module provides the seam a breaker state machine talks to:
//! - `RollingWindow`: time-bucketed counts over a rolling span
//! - `NullRecorder`: No-op recorder for testing and benchmarking

use crate::RollingWindow;

/// Abstract sink and source for operation outcomes
pub trait OutcomeRecorder: Send + Sync + std::fmt::Debug {
    /// Record a successful operation
    fn record_success(&self);

    /// Record a failed operation
    fn record_failure(&self);

    /// Failures currently counted
    fn failures(&self) -> u64;

    /// Successes currently counted
    fn successes(&self) -> u64;

    /// Failures over all counted outcomes, in `[0.0, 1.0]`
    fn error_rate(&self) -> f64;

    /// Forget all counted outcomes
    fn reset(&self);
}

impl OutcomeRecorder for RollingWindow {
    fn record_success(&self) {
        RollingWindow::record_success(self);
    }

    fn record_failure(&self) {
        RollingWindow::record_failure(self);
    }

    fn failures(&self) -> u64 {
        RollingWindow::failures(self)
    }

    fn successes(&self) -> u64 {
        RollingWindow::successes(self)
    }

    fn error_rate(&self) -> f64 {
        RollingWindow::error_rate(self)
    }

    fn reset(&self) {
        RollingWindow::reset(self);
    }
}

/// No-op recorder
///
/// Discards every outcome and always reports zero. Useful for exercising
/// breaker logic without any counting, or when an external system already
/// tracks outcomes.
///
/// # Example
///
/// ```rust
/// use breaker_window::{NullRecorder, OutcomeRecorder};
/// use std::sync::Arc;
///
/// let recorder: Arc<dyn OutcomeRecorder> = Arc::new(NullRecorder);
/// recorder.record_failure();
/// assert_eq!(recorder.error_rate(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRecorder;

impl OutcomeRecorder for NullRecorder {
    fn record_success(&self) {
        // No-op
    }

    fn record_failure(&self) {
        // No-op
    }

    fn failures(&self) -> u64 {
        0
    }

    fn successes(&self) -> u64 {
        0
    }

    fn error_rate(&self) -> f64 {
        0.0
    }

    fn reset(&self) {
        // No-op
    }
}
