//! Error types for window construction

use thiserror::Error;

/// Invalid window configuration, reported when the window is built
///
/// Recording and querying never fail once a window exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// A window needs at least one bucket
    #[error("rolling window requires at least one bucket")]
    ZeroBuckets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_buckets_message() {
        assert_eq!(
            WindowError::ZeroBuckets.to_string(),
            "rolling window requires at least one bucket"
        );
    }
}
