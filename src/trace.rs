//! Bounded velocity history for plotting/telemetry consumers.

use std::collections::VecDeque;

use crate::TrackedPoint;

/// Default number of samples retained, sized for a live plot window.
pub const DEFAULT_TRACE_CAPACITY: usize = 50;

/// One recorded velocity sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceSample {
    /// Caller-supplied timestamp (seconds since tracking started).
    pub elapsed: f64,
    /// Velocity magnitude at that instant.
    pub speed: f64,
}

/// Sliding window of velocity magnitudes over time.
///
/// Timestamps come from the caller, keeping the core free of wall-clock
/// reads. Oldest samples are dropped once the window is full.
#[derive(Clone, Debug)]
pub struct VelocityTrace {
    samples: VecDeque<TraceSample>,
    capacity: usize,
}

impl Default for VelocityTrace {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTrace {
    /// Create a trace with the default window size.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TRACE_CAPACITY)
    }

    /// Create a trace retaining at most `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record the point's current speed at the given elapsed time.
    pub fn push(&mut self, elapsed: f64, point: &TrackedPoint) {
        self.push_sample(TraceSample {
            elapsed,
            speed: point.speed(),
        });
    }

    /// Record a raw sample.
    pub fn push_sample(&mut self, sample: TraceSample) {
        if self.capacity == 0 {
            return;
        }
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Iterate over retained samples, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &TraceSample> {
        self.samples.iter()
    }

    /// The most recent sample, if any.
    pub fn latest(&self) -> Option<&TraceSample> {
        self.samples.back()
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the trace is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of retained samples.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
