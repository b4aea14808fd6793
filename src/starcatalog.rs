//! In-memory star catalog used by the pairwise reduction.
//!
//! A `Catalog` is an ordered, fixed-length array of [`StarRecord`]s. Index
//! position is the pair identity used by the dedup matrix, and insertion
//! order equals file order. The catalog is never mutated after it is built,
//! so workers read it through a shared reference with no synchronization.

use crate::StarRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    stars: Vec<StarRecord>,
}

impl Catalog {
    /// Build a catalog from owned records, preserving their order.
    pub fn new(stars: Vec<StarRecord>) -> Self {
        Self { stars }
    }

    /// Build a catalog by cloning records from a slice.
    pub fn from_slice(stars: &[StarRecord]) -> Self {
        Self::new(stars.to_vec())
    }

    /// Return the total number of stars in the catalog.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Return `true` when the catalog contains no stars.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Return all catalog stars as an immutable slice.
    pub fn stars(&self) -> &[StarRecord] {
        &self.stars
    }

    pub fn get(&self, index: usize) -> Option<&StarRecord> {
        self.stars.get(index)
    }
}

impl From<Vec<StarRecord>> for Catalog {
    fn from(stars: Vec<StarRecord>) -> Self {
        Self::new(stars)
    }
}
