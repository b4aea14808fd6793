//! Running statistics shared by all reduction workers.
//!
//! [`RunningAggregate`] is plain data: count, incremental mean, min and max.
//! [`AggregateReducer`] puts one behind a single mutex so that the four-field
//! update of [`AggregateReducer::observe`] is indivisible. Any interleaving of
//! `observe` calls across threads is therefore equivalent to some serial
//! order of the same calls.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Count, running mean and extrema of the distances observed so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningAggregate {
    count: u64,
    mean: f64,
    min: f64,
    max: f64,
}

impl Default for RunningAggregate {
    fn default() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl RunningAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one distance into the aggregate.
    ///
    /// The mean uses the incremental update `mean += (x - mean) / count`,
    /// which never forms the full sum.
    #[inline]
    pub fn observe(&mut self, distance: f64) {
        self.count += 1;
        self.mean += (distance - self.mean) / self.count as f64;
        if distance < self.min {
            self.min = distance;
        }
        if distance > self.max {
            self.max = distance;
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Arithmetic mean of the observed distances, `0.0` before any.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Smallest observed distance, `None` before any.
    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    /// Largest observed distance, `None` before any.
    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }
}

/// Mutex-guarded [`RunningAggregate`] shared by reference between workers.
#[derive(Debug, Default)]
pub struct AggregateReducer {
    state: Mutex<RunningAggregate>,
}

impl AggregateReducer {
    pub fn new() -> Self {
        Self::default()
    }

    // `observe` cannot panic while holding the lock, so a poisoned mutex still
    // holds a consistent aggregate.
    fn lock(&self) -> MutexGuard<'_, RunningAggregate> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Atomically fold one distance into the shared aggregate.
    #[inline]
    pub fn observe(&self, distance: f64) {
        self.lock().observe(distance);
    }

    /// Copy of the current aggregate.
    pub fn snapshot(&self) -> RunningAggregate {
        *self.lock()
    }

    /// Consume the reducer and return the final aggregate.
    pub fn into_inner(self) -> RunningAggregate {
        self.state.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
