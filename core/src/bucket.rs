//! Per-slice outcome counters

/// Failure and success counts for one time slice of a window
///
/// Buckets carry no synchronization of their own; the owning
/// [`RollingWindow`](crate::RollingWindow) guards every access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bucket {
    failures: u64,
    successes: u64,
}

impl Bucket {
    /// Create an empty bucket
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure
    pub fn fail(&mut self) {
        self.failures += 1;
    }

    /// Record a success
    pub fn success(&mut self) {
        self.successes += 1;
    }

    /// Zero both counters
    pub fn reset(&mut self) {
        self.failures = 0;
        self.successes = 0;
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Failures plus successes
    pub fn total(&self) -> u64 {
        self.failures + self.successes
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bucket_is_empty() {
        let bucket = Bucket::new();

        assert_eq!(bucket.failures(), 0);
        assert_eq!(bucket.successes(), 0);
        assert!(bucket.is_empty());
    }

    #[test]
    fn test_bucket_counts() {
        let mut bucket = Bucket::new();

        bucket.fail();
        bucket.success();
        bucket.success();

        assert_eq!(bucket.failures(), 1);
        assert_eq!(bucket.successes(), 2);
        assert_eq!(bucket.total(), 3);
    }

    #[test]
    fn test_bucket_reset() {
        let mut bucket = Bucket::new();

        for _ in 0..5 {
            bucket.fail();
            bucket.success();
        }
        bucket.reset();

        assert_eq!(bucket, Bucket::default());
        assert!(bucket.is_empty());
    }
}
