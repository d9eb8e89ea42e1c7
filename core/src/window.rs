//! Rolling window of time-bucketed outcome counters
//!
//! A window divides a fixed time span into a ring of buckets. Writes land in
//! the current bucket, rotating to the next one first when enough time has
//! passed. Reads sum every bucket in the ring and never rotate, so counts in
//! expired buckets stay visible until a later write clears them.

use crate::{
    EventKind,
    bucket::Bucket,
    builder::WindowBuilder,
    clock::{Clock, MonotonicClock},
    config::{RotationPolicy, WindowConfig},
    errors::WindowError,
};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Thread-safe rolling success/failure counter
///
/// One readers-writer lock guards the ring together with the rotation
/// bookkeeping. Writes are linearized; reads run concurrently with each
/// other and always observe every bucket at the same instant.
#[derive(Debug)]
pub struct RollingWindow {
    name: Option<String>,
    config: WindowConfig,
    bucket_duration: Duration,
    clock: Arc<dyn Clock>,
    ring: RwLock<Ring>,
}

#[derive(Debug)]
struct Ring {
    buckets: Box<[Bucket]>,
    current: usize,
    /// Clock reading of the most recent write
    last_access: Duration,
    /// Clock reading at which the current bucket began
    bucket_started: Duration,
}

impl Ring {
    fn new(len: usize, now: Duration) -> Self {
        Self {
            buckets: vec![Bucket::new(); len].into_boxed_slice(),
            current: 0,
            last_access: now,
            bucket_started: now,
        }
    }

    fn advance(&mut self, steps: usize) {
        let len = self.buckets.len();
        for _ in 0..steps {
            self.current = (self.current + 1) % len;
            self.buckets[self.current].reset();
        }
    }

    fn current_mut(&mut self) -> &mut Bucket {
        &mut self.buckets[self.current]
    }

    fn totals(&self) -> WindowSnapshot {
        self.buckets
            .iter()
            .fold(WindowSnapshot::default(), |acc, b| WindowSnapshot {
                failures: acc.failures + b.failures(),
                successes: acc.successes + b.successes(),
            })
    }
}

/// Aggregate counts read under a single lock acquisition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub failures: u64,
    pub successes: u64,
}

impl WindowSnapshot {
    pub fn total(&self) -> u64 {
        self.failures + self.successes
    }

    /// Fraction of recorded outcomes that failed, `0.0` when nothing was recorded
    pub fn error_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.failures as f64 / total as f64
        }
    }
}

/// Number of buckets a write must rotate through before recording
///
/// `elapsed` is measured from the last write under
/// [`RotationPolicy::SingleStep`] and from the start of the current bucket
/// under [`RotationPolicy::CatchUp`]. The result never exceeds
/// `bucket_count`.
pub fn rotation_steps(
    policy: RotationPolicy,
    elapsed: Duration,
    bucket_duration: Duration,
    bucket_count: usize,
) -> usize {
    if bucket_count == 0 {
        return 0;
    }

    match policy {
        RotationPolicy::SingleStep => usize::from(elapsed > bucket_duration),
        RotationPolicy::CatchUp => {
            if elapsed < bucket_duration || elapsed.is_zero() {
                0
            } else if bucket_duration.is_zero() {
                bucket_count
            } else {
                let expired = elapsed.as_nanos() / bucket_duration.as_nanos();
                expired.min(bucket_count as u128) as usize
            }
        }
    }
}

impl RollingWindow {
    /// Create a window spanning `window`, split into `buckets` equal slices
    ///
    /// Uses [`RotationPolicy::SingleStep`] and real monotonic time. Fails
    /// with [`WindowError::ZeroBuckets`] when `buckets` is zero.
    pub fn new(window: Duration, buckets: usize) -> Result<Self, WindowError> {
        Self::from_config(WindowConfig::new(window, buckets))
    }

    pub fn from_config(config: WindowConfig) -> Result<Self, WindowError> {
        config.validate()?;
        Ok(Self::from_parts(None, config, Arc::new(MonotonicClock::new())))
    }

    /// Create a builder for a window with custom options
    pub fn builder() -> WindowBuilder {
        WindowBuilder::new()
    }

    /// Assemble a window from a validated config
    pub(crate) fn from_parts(
        name: Option<String>,
        config: WindowConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let bucket_duration = config.bucket_duration();
        let ring = Ring::new(config.buckets, clock.now());

        tracing::debug!(
            window = ?name,
            buckets = config.buckets,
            ?bucket_duration,
            rotation = ?config.rotation,
            "created rolling window"
        );

        Self {
            name,
            config,
            bucket_duration,
            clock,
            ring: RwLock::new(ring),
        }
    }

    /// Record an outcome in the current bucket, rotating first if it expired
    pub fn record(&self, kind: EventKind) {
        let mut ring = self.ring.write();
        let now = self.clock.now();

        self.rotate(&mut ring, now);

        let bucket = ring.current_mut();
        match kind {
            EventKind::Failure => bucket.fail(),
            EventKind::Success => bucket.success(),
        }
    }

    pub fn record_failure(&self) {
        self.record(EventKind::Failure);
    }

    pub fn record_success(&self) {
        self.record(EventKind::Success);
    }

    /// Total failures across every bucket in the ring
    pub fn failures(&self) -> u64 {
        self.ring.read().buckets.iter().map(Bucket::failures).sum()
    }

    /// Total successes across every bucket in the ring
    pub fn successes(&self) -> u64 {
        self.ring.read().buckets.iter().map(Bucket::successes).sum()
    }

    /// Failures divided by all recorded outcomes, `0.0` when the ring is empty
    pub fn error_rate(&self) -> f64 {
        self.snapshot().error_rate()
    }

    /// Failures and successes from one consistent view of the ring
    pub fn snapshot(&self) -> WindowSnapshot {
        self.ring.read().totals()
    }

    /// Copy of every bucket, oldest first and current last
    pub fn buckets(&self) -> Vec<Bucket> {
        let ring = self.ring.read();
        let len = ring.buckets.len();
        (1..=len)
            .map(|offset| ring.buckets[(ring.current + offset) % len])
            .collect()
    }

    /// Zero every bucket
    ///
    /// The current bucket and the last-write time are left where they are.
    pub fn reset(&self) {
        let mut ring = self.ring.write();
        ring.buckets.iter_mut().for_each(Bucket::reset);

        tracing::debug!(window = ?self.name, "reset rolling window");
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn bucket_count(&self) -> usize {
        self.config.buckets
    }

    pub fn bucket_duration(&self) -> Duration {
        self.bucket_duration
    }

    /// Nominal span covered by the whole ring
    pub fn window(&self) -> Duration {
        self.config.window
    }

    pub fn rotation_policy(&self) -> RotationPolicy {
        self.config.rotation
    }

    fn rotate(&self, ring: &mut Ring, now: Duration) {
        let policy = self.config.rotation;
        let since = match policy {
            RotationPolicy::SingleStep => ring.last_access,
            RotationPolicy::CatchUp => ring.bucket_started,
        };
        let elapsed = now.saturating_sub(since);
        let steps = rotation_steps(policy, elapsed, self.bucket_duration, ring.buckets.len());

        if steps > 0 {
            ring.advance(steps);
            ring.bucket_started = match policy {
                RotationPolicy::CatchUp if steps < ring.buckets.len() => {
                    since.saturating_add(saturating_mul(self.bucket_duration, steps))
                }
                _ => now,
            };

            tracing::trace!(
                window = ?self.name,
                steps,
                current = ring.current,
                ?elapsed,
                "rotated rolling window"
            );
        }

        ring.last_access = now;
    }
}

impl Default for RollingWindow {
    /// Ten second window with one second buckets
    fn default() -> Self {
        Self::from_parts(
            None,
            WindowConfig::default(),
            Arc::new(MonotonicClock::new()),
        )
    }
}

fn saturating_mul(duration: Duration, factor: usize) -> Duration {
    duration.saturating_mul(u32::try_from(factor).unwrap_or(u32::MAX))
}
