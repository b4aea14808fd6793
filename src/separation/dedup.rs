//! Symmetric "already computed" flags for catalog index pairs.
//!
//! `distance(i, j) == distance(j, i)`, so each unordered pair must be
//! observed exactly once. The matrix keeps one flag per ordered cell of an
//! `n × n` grid and always writes `(i, j)` and `(j, i)` together.
//!
//! Flags are atomic so workers whose row blocks differ can share the grid
//! without a data race. The two stores of [`PairDedupMatrix::mark_computed`]
//! are not one atomic step, so a concurrent reader may see one cell set before
//! the other. Workers therefore use [`PairDedupMatrix::try_claim`], which
//! arbitrates on the canonical cell `(min(i, j), max(i, j))` with a
//! compare-exchange: exactly one caller wins each unordered pair.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, SeparationError};

/// `n × n` grid of pair flags, zero-initialized at construction.
///
/// The flags guard no other memory, so relaxed ordering is sufficient; the
/// compare-exchange alone decides ownership of a pair.
#[derive(Debug)]
pub struct PairDedupMatrix {
    n: usize,
    flags: Vec<AtomicBool>,
}

impl PairDedupMatrix {
    /// Allocate a cleared matrix for `n` catalog entries.
    ///
    /// Allocation is fallible: an `n * n` that overflows or cannot be reserved
    /// returns [`SeparationError::Allocation`] instead of aborting.
    pub fn new(n: usize) -> Result<Self> {
        let bytes = (n as u128) * (n as u128) * std::mem::size_of::<AtomicBool>() as u128;
        let cells = n
            .checked_mul(n)
            .ok_or(SeparationError::Allocation { bytes })?;

        let mut flags = Vec::new();
        flags
            .try_reserve_exact(cells)
            .map_err(|_| SeparationError::Allocation { bytes })?;
        flags.resize_with(cells, || AtomicBool::new(false));

        Ok(Self { n, flags })
    }

    /// Number of catalog entries per side.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    fn cell(&self, i: usize, j: usize) -> &AtomicBool {
        debug_assert!(i < self.n && j < self.n, "pair ({i}, {j}) outside {0}x{0}", self.n);
        &self.flags[i * self.n + j]
    }

    /// Whether `(i, j)` has been marked.
    #[inline]
    pub fn is_computed(&self, i: usize, j: usize) -> bool {
        self.cell(i, j).load(Ordering::Relaxed)
    }

    /// Set both `(i, j)` and `(j, i)`.
    pub fn mark_computed(&self, i: usize, j: usize) {
        self.cell(i, j).store(true, Ordering::Relaxed);
        self.cell(j, i).store(true, Ordering::Relaxed);
    }

    /// Claim the unordered pair `{i, j}` for evaluation.
    ///
    /// Returns `true` for exactly one caller per pair, across all threads;
    /// both cells are set once it returns. Self-pairs are never claimable.
    #[inline]
    pub fn try_claim(&self, i: usize, j: usize) -> bool {
        if i == j {
            return false;
        }
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let won = self
            .cell(lo, hi)
            .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
            .is_ok();
        if won {
            self.cell(hi, lo).store(true, Ordering::Relaxed);
        }
        won
    }
}
