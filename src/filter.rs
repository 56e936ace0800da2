//! Rolling-average smoothing of raw samples.

use heapless::Deque;

use crate::sample::{AveragedReading, Sample};

/// Componentwise rolling average over the `N` most recent samples.
///
/// Samples are kept in arrival order in a bounded queue. Once the queue is
/// full, accepting a new sample evicts the oldest one, and the reported
/// reading always covers a contiguous window ending at the latest delivery.
///
/// The mean is recomputed from the retained samples on every read, summing
/// in insertion order; there is no incremental running sum.
pub struct RollingAverage<const N: usize> {
    history: Deque<Sample, N>,
}

impl<const N: usize> RollingAverage<N> {
    /// Creates an empty filter.
    pub const fn new() -> Self {
        Self {
            history: Deque::new(),
        }
    }

    /// Accepts one sample, evicting the oldest retained sample when the
    /// window is already full.
    pub fn push(&mut self, sample: Sample) {
        if self.history.is_full() {
            self.history.pop_front();
        }
        // a slot is free at this point, so the push cannot fail
        let _ = self.history.push_back(sample);
    }

    /// The mean of the retained samples, or a zero reading while the
    /// window is still empty.
    pub fn current(&self) -> AveragedReading {
        if self.history.is_empty() {
            return AveragedReading::ZERO;
        }

        let mut sum = Sample::ZERO;
        for sample in self.history.iter() {
            sum.x += sample.x;
            sum.y += sample.y;
            sum.z += sample.z;
        }

        let count = self.history.len() as f64;
        AveragedReading::new(sum.x / count, sum.y / count, sum.z / count)
    }

    /// Number of samples currently retained, at most `N`.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The window size the filter was built with.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Drops all retained samples, returning the filter to its initial
    /// zero-reading state.
    pub fn reset(&mut self) {
        self.history.clear();
    }
}

impl<const N: usize> Default for RollingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}
