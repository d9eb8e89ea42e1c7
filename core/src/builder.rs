//! Builder API for ergonomic window configuration

use crate::{
    RollingWindow,
    clock::{Clock, MonotonicClock},
    config::{RotationPolicy, WindowConfig},
    errors::WindowError,
};
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating rolling windows with fluent API
///
/// ```rust
/// use breaker_window::{RollingWindow, RotationPolicy};
/// use std::time::Duration;
///
/// let window = RollingWindow::builder()
///     .name("payment_api")
///     .window(Duration::from_secs(30))
///     .buckets(15)
///     .rotation(RotationPolicy::CatchUp)
///     .build()
///     .expect("non-zero bucket count");
///
/// assert_eq!(window.bucket_duration(), Duration::from_secs(2));
/// ```
#[derive(Debug, Default)]
pub struct WindowBuilder {
    name: Option<String>,
    config: WindowConfig,
    clock: Option<Arc<dyn Clock>>,
}

impl WindowBuilder {
    /// Create a builder holding the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Label the window in log output
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the total time span covered by the window
    pub fn window(mut self, window: Duration) -> Self {
        self.config.window = window;
        self
    }

    /// Set the total time span in seconds
    pub fn window_secs(self, seconds: u64) -> Self {
        self.window(Duration::from_secs(seconds))
    }

    /// Set the number of buckets the span is divided into
    pub fn buckets(mut self, buckets: usize) -> Self {
        self.config.buckets = buckets;
        self
    }

    /// Set how writes expire old buckets
    pub fn rotation(mut self, rotation: RotationPolicy) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: WindowConfig) -> Self {
        self.config = config;
        self
    }

    /// Set a custom time source
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the window, rejecting a zero bucket count
    pub fn build(self) -> Result<RollingWindow, WindowError> {
        self.config.validate()?;

        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(MonotonicClock::new()));

        Ok(RollingWindow::from_parts(self.name, self.config, clock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn test_builder_defaults() {
        let window = WindowBuilder::new().build().unwrap();

        assert_eq!(window.bucket_count(), 10);
        assert_eq!(window.window(), Duration::from_secs(10));
        assert_eq!(window.rotation_policy(), RotationPolicy::SingleStep);
        assert!(window.name().is_none());
    }

    #[test]
    fn test_builder_custom_config() {
        let window = WindowBuilder::new()
            .name("inventory")
            .window_secs(120)
            .buckets(12)
            .rotation(RotationPolicy::CatchUp)
            .build()
            .unwrap();

        assert_eq!(window.name(), Some("inventory"));
        assert_eq!(window.bucket_duration(), Duration::from_secs(10));
        assert_eq!(window.rotation_policy(), RotationPolicy::CatchUp);
    }

    #[test]
    fn test_builder_from_config() {
        let config = WindowConfig::new(Duration::from_secs(5), 5);
        let window = WindowBuilder::new().config(config).build().unwrap();

        assert_eq!(window.bucket_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_builder_rejects_zero_buckets() {
        let result = WindowBuilder::new().buckets(0).build();
        assert_eq!(result.unwrap_err(), WindowError::ZeroBuckets);
    }

    #[test]
    fn test_builder_with_manual_clock() {
        let clock = Arc::new(ManualClock::new());
        let window = WindowBuilder::new()
            .window_secs(2)
            .buckets(2)
            .clock(clock.clone())
            .build()
            .unwrap();

        window.record_failure();
        clock.advance(Duration::from_secs(5));
        window.record_success();
        clock.advance(Duration::from_secs(5));
        window.record_success();

        // Two single-step rotations wrap a two-bucket ring
        assert_eq!(window.failures(), 0);
        assert_eq!(window.successes(), 2);
    }
}
