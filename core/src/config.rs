//! Window configuration

use crate::errors::WindowError;
use std::time::Duration;

/// Total span covered by a default window
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(10);

/// Number of buckets in a default window
pub const DEFAULT_BUCKETS: usize = 10;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// How a write decides which buckets have expired
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RotationPolicy {
    /// Rotate one bucket when more than a bucket duration has passed since
    /// the previous write, however long the gap was.
    ///
    /// Buckets further back in the ring keep their counts until later writes
    /// rotate past them, so after a long idle period the aggregate still
    /// includes old activity.
    #[default]
    SingleStep,
    /// Rotate one bucket for every full bucket duration since the current
    /// bucket began, clearing the whole ring once a full window has passed.
    CatchUp,
}

/// Circuit breaker window configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowConfig {
    /// Total time span covered by all buckets together
    pub window: Duration,

    /// Number of buckets the span is divided into
    pub buckets: usize,

    /// Expiry policy applied on writes
    pub rotation: RotationPolicy,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            buckets: DEFAULT_BUCKETS,
            rotation: RotationPolicy::default(),
        }
    }
}

impl WindowConfig {
    pub fn new(window: Duration, buckets: usize) -> Self {
        Self {
            window,
            buckets,
            ..Self::default()
        }
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn with_buckets(mut self, buckets: usize) -> Self {
        self.buckets = buckets;
        self
    }

    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }

    /// Time slice covered by each bucket
    ///
    /// Integer division, truncated to whole nanoseconds. Zero when
    /// `buckets` is zero; such a config never passes [`validate`](Self::validate).
    pub fn bucket_duration(&self) -> Duration {
        let nanos = self
            .window
            .as_nanos()
            .checked_div(self.buckets as u128)
            .unwrap_or(0);
        Duration::new(
            (nanos / NANOS_PER_SEC) as u64,
            (nanos % NANOS_PER_SEC) as u32,
        )
    }

    /// Reject configurations a window cannot be built from
    pub fn validate(&self) -> Result<(), WindowError> {
        if self.buckets == 0 {
            return Err(WindowError::ZeroBuckets);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WindowConfig::default();

        assert_eq!(config.window, Duration::from_secs(10));
        assert_eq!(config.buckets, 10);
        assert_eq!(config.rotation, RotationPolicy::SingleStep);
        assert_eq!(config.bucket_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_config_builder() {
        let config = WindowConfig::default()
            .with_window(Duration::from_secs(60))
            .with_buckets(6)
            .with_rotation(RotationPolicy::CatchUp);

        assert_eq!(config.bucket_duration(), Duration::from_secs(10));
        assert_eq!(config.rotation, RotationPolicy::CatchUp);
    }

    #[test]
    fn test_bucket_duration_truncates() {
        let config = WindowConfig::new(Duration::from_nanos(10), 3);
        assert_eq!(config.bucket_duration(), Duration::from_nanos(3));

        let config = WindowConfig::new(Duration::from_millis(1000), 3);
        assert_eq!(config.bucket_duration(), Duration::from_nanos(333_333_333));
    }

    #[test]
    fn test_bucket_duration_large_window() {
        let config = WindowConfig::new(Duration::from_secs(u64::MAX), 1);
        assert_eq!(config.bucket_duration(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_validate_rejects_zero_buckets() {
        let config = WindowConfig::new(Duration::from_secs(10), 0);

        assert_eq!(config.validate(), Err(WindowError::ZeroBuckets));
        assert_eq!(config.bucket_duration(), Duration::ZERO);
    }

    #[test]
    fn test_validate_accepts_zero_window() {
        let config = WindowConfig::new(Duration::ZERO, 4);

        assert!(config.validate().is_ok());
        assert_eq!(config.bucket_duration(), Duration::ZERO);
    }
}
