//! # angsep
//!
//! Pairwise **angular-separation statistics** over a star catalog.
//!
//! Given a catalog of `n` stars, `angsep` evaluates the great-circle
//! separation of every unordered pair of distinct entries and reduces the
//! `n(n-1)/2` values to their minimum, maximum and mean. The scan can run on
//! the calling thread or be split across a fixed pool of worker threads.
//!
//! ## Example
//!
//! ```no_run
//! use std::num::NonZeroUsize;
//! use angsep::{load_catalog, compute_separation_stats, ReductionConfig, DEFAULT_CATALOG_CAPACITY};
//!
//! let catalog = load_catalog("data/tycho-trimmed.csv", DEFAULT_CATALOG_CAPACITY).unwrap();
//! let config = ReductionConfig::parallel(NonZeroUsize::new(8).unwrap());
//! let report = compute_separation_stats(&catalog, &config).unwrap();
//! println!("{report}");
//! ```
//!
//! ## Algorithm overview
//!
//! 1. **Partitioning**: rows `[0, n)` are cut into one contiguous block per
//!    worker using `n / workers` rows per block
//! 2. **Scanning**: each worker pairs its rows with every column, skipping
//!    self-pairs and pairs already claimed in a shared `n × n` flag matrix
//! 3. **Reduction**: each claimed pair's separation is folded into a single
//!    mutex-guarded aggregate (count, incremental mean, min, max)
//!
//! The flag matrix arbitrates with an atomic compare-exchange on the
//! canonical cell of each pair, so every unordered pair is counted exactly
//! once regardless of which worker reaches it first.
//!
//! With the default [`PartitionPolicy::Truncate`] the `n % workers` tail rows
//! are left unassigned, reproducing the reference tool's output; use
//! [`PartitionPolicy::CoverRemainder`] to include them.

pub mod catalogs;
pub mod error;
pub mod separation;
pub mod star;
pub mod starcatalog;

pub use catalogs::tycho::{
    load_catalog, parse_catalog, DEFAULT_CATALOG_CAPACITY, DEFAULT_CATALOG_PATH,
};
pub use error::{ErrorKind, Result, SeparationError};
pub use separation::{
    angular_distance_deg, compute_separation_stats, AggregateReducer, Coordinator,
    PairDedupMatrix, PartitionPlan, PartitionPolicy, Phase, ReductionConfig, ReductionMode,
    RunningAggregate, SeparationReport, WorkerSummary,
};
pub use star::*;
pub use starcatalog::*;
