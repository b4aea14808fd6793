//! Row-block partitioning of the pair space.
//!
//! Worker `t` of `w` owns rows `[(n / w) * t, (n / w) * (t + 1))` and scans
//! every column for each of its rows. With [`PartitionPolicy::Truncate`] the
//! last `n % w` rows belong to nobody, matching the reference tool: pairs
//! whose *both* indices fall in that tail are never evaluated.
//! [`PartitionPolicy::CoverRemainder`] stretches the last block to `n`.

use std::ops::Range;

use super::PartitionPolicy;
use crate::error::{Result, SeparationError};

/// Immutable mapping from worker index to a half-open row range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    rows: usize,
    ranges: Vec<Range<usize>>,
}

impl PartitionPlan {
    /// Split `n` rows across `workers` contiguous blocks.
    ///
    /// `workers` must be at least one. More workers than rows is allowed and
    /// yields empty ranges.
    pub fn new(n: usize, workers: usize, policy: PartitionPolicy) -> Result<Self> {
        if workers == 0 {
            return Err(SeparationError::Configuration(
                "worker count must be at least 1".to_string(),
            ));
        }

        let block = n / workers;
        let mut ranges: Vec<Range<usize>> =
            (0..workers).map(|t| block * t..block * (t + 1)).collect();
        if policy == PartitionPolicy::CoverRemainder {
            if let Some(last) = ranges.last_mut() {
                last.end = n;
            }
        }

        Ok(Self { rows: n, ranges })
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn workers(&self) -> usize {
        self.ranges.len()
    }

    /// Rows no worker visits.
    pub fn uncovered(&self) -> Range<usize> {
        let end = self.ranges.last().map_or(0, |r| r.end);
        end..self.rows
    }
}
