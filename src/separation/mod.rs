//! Pairwise angular-separation reduction over a star catalog.
//!
//! Every unordered pair of distinct catalog entries is evaluated once and
//! folded into three statistics: minimum, maximum and running mean.
//!
//! 1. **Planning**: in parallel mode the row range `[0, n)` is cut into one
//!    contiguous block per worker ([`partition`]).
//! 2. **Scanning**: each worker visits `{its rows} × {all columns}`, skipping
//!    self-pairs and pairs already claimed in the shared [`dedup`] matrix.
//! 3. **Reducing**: each newly claimed pair's [`distance`] is merged into the
//!    shared [`aggregate`] under a single lock.
//! 4. **Reporting**: the [`coordinator`] joins the workers and returns the
//!    statistics together with the wall-clock time of the reduction.
//!
//! Sequential mode runs the same scan once over the whole row range on the
//! calling thread.

pub mod aggregate;
pub mod coordinator;
pub mod dedup;
pub mod distance;
pub mod partition;

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;
use std::time::Duration;

pub use aggregate::{AggregateReducer, RunningAggregate};
pub use coordinator::{compute_separation_stats, Coordinator, Phase};
pub use dedup::PairDedupMatrix;
pub use distance::angular_distance_deg;
pub use partition::PartitionPlan;

// ── Configuration ───────────────────────────────────────────────────────────

/// How the pair space is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReductionMode {
    /// One pass over every row on the calling thread.
    #[default]
    Sequential,
    /// A fixed pool of OS threads, one row block each.
    Parallel { workers: NonZeroUsize },
}

/// What to do with the `n % workers` rows left over by integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionPolicy {
    /// Leave the tail rows unassigned, as the reference tool does. Pairs with
    /// both indices in the tail are never evaluated.
    #[default]
    Truncate,
    /// Give the tail rows to the last worker.
    CoverRemainder,
}

/// Parameters for one reduction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReductionConfig {
    pub mode: ReductionMode,
    /// Only consulted in parallel mode.
    pub partition: PartitionPolicy,
}

impl ReductionConfig {
    pub fn sequential() -> Self {
        Self::default()
    }

    pub fn parallel(workers: NonZeroUsize) -> Self {
        Self {
            mode: ReductionMode::Parallel { workers },
            partition: PartitionPolicy::default(),
        }
    }

    pub fn with_partition(mut self, partition: PartitionPolicy) -> Self {
        self.partition = partition;
        self
    }
}

// ── Results ─────────────────────────────────────────────────────────────────

/// Work done by a single worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerSummary {
    pub worker: usize,
    pub rows: Range<usize>,
    /// Distinct pairs this worker claimed and observed.
    pub pairs: u64,
}

/// Outcome of a completed reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparationReport {
    /// Catalog size `n`.
    pub records: usize,
    pub mode: ReductionMode,
    pub stats: RunningAggregate,
    /// Wall-clock time of the reduction phase; catalog loading is excluded.
    pub elapsed: Duration,
    pub workers: Vec<WorkerSummary>,
}

impl fmt::Display for SeparationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average distance found is {:.6}", self.stats.mean())?;
        match self.stats.min() {
            Some(min) => writeln!(f, "Minimum distance found is {min:.6}")?,
            None => writeln!(f, "Minimum distance found is n/a")?,
        }
        match self.stats.max() {
            Some(max) => writeln!(f, "Maximum distance found is {max:.6}")?,
            None => writeln!(f, "Maximum distance found is n/a")?,
        }
        write!(f, "Program took {:.6} seconds", self.elapsed.as_secs_f64())
    }
}
