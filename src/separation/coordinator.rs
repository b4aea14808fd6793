//! Orchestration of a reduction run.
//!
//! The coordinator owns the shared state of a run (dedup matrix and
//! aggregate), drives it through [`Phase`]s, and hands each worker a typed
//! `WorkerContext`. Sequential and parallel modes share one scan routine,
//! `reduce_rows`; they differ only in how many row ranges it is given and on
//! which threads it runs.

use std::ops::Range;
use std::thread;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::aggregate::AggregateReducer;
use super::dedup::PairDedupMatrix;
use super::distance::angular_distance_deg;
use super::partition::PartitionPlan;
use super::{ReductionConfig, ReductionMode, SeparationReport, WorkerSummary};
use crate::error::{Result, SeparationError};
use crate::Catalog;

/// Lifecycle of a [`Coordinator`].
///
/// `Loaded → Sequential | Parallel → Reduced → Reported`. A failed run stays
/// in the phase where the error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loaded,
    Sequential,
    Parallel,
    Reduced,
    Reported,
}

/// Everything one worker needs: its rows and the shared handles.
#[derive(Debug, Clone)]
struct WorkerContext<'a> {
    worker: usize,
    rows: Range<usize>,
    catalog: &'a Catalog,
    dedup: &'a PairDedupMatrix,
    sink: &'a AggregateReducer,
}

/// Scan `{ctx.rows} × {all columns}`, observing every pair this worker
/// claims first.
fn reduce_rows(ctx: WorkerContext<'_>) -> WorkerSummary {
    let stars = ctx.catalog.stars();
    let mut pairs = 0u64;

    debug!("worker {} scanning rows {:?}", ctx.worker, ctx.rows);
    for i in ctx.rows.clone() {
        let a = &stars[i];
        for (j, b) in stars.iter().enumerate() {
            if i == j || ctx.dedup.is_computed(i, j) || !ctx.dedup.try_claim(i, j) {
                continue;
            }
            let distance = angular_distance_deg(a.ra_deg, a.dec_deg, b.ra_deg, b.dec_deg);
            ctx.sink.observe(distance);
            pairs += 1;
        }
    }
    debug!("worker {} observed {} pairs", ctx.worker, pairs);

    WorkerSummary {
        worker: ctx.worker,
        rows: ctx.rows,
        pairs,
    }
}

/// Drives one reduction over a loaded catalog.
#[derive(Debug)]
pub struct Coordinator<'a> {
    catalog: &'a Catalog,
    config: ReductionConfig,
    phase: Phase,
}

impl<'a> Coordinator<'a> {
    pub fn new(catalog: &'a Catalog, config: ReductionConfig) -> Self {
        Self {
            catalog,
            config,
            phase: Phase::Loaded,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &ReductionConfig {
        &self.config
    }

    /// Run the reduction to completion and return the report.
    ///
    /// Errors are fatal: dedup allocation failure, worker spawn failure and
    /// worker panics all abort the run without partial statistics.
    pub fn run(&mut self) -> Result<SeparationReport> {
        if self.phase != Phase::Loaded {
            return Err(SeparationError::Configuration(format!(
                "coordinator already ran (phase {:?})",
                self.phase
            )));
        }

        let n = self.catalog.len();
        let dedup = PairDedupMatrix::new(n)?;
        let reducer = AggregateReducer::new();

        let start = Instant::now();
        let workers = match self.config.mode {
            ReductionMode::Sequential => {
                self.phase = Phase::Sequential;
                info!("Reducing {} records sequentially", n);
                vec![reduce_rows(WorkerContext {
                    worker: 0,
                    rows: 0..n,
                    catalog: self.catalog,
                    dedup: &dedup,
                    sink: &reducer,
                })]
            }
            ReductionMode::Parallel { workers } => {
                self.phase = Phase::Parallel;
                let plan = PartitionPlan::new(n, workers.get(), self.config.partition)?;
                info!("Reducing {} records on {} workers", n, plan.workers());
                run_parallel(self.catalog, &plan, &dedup, &reducer)?
            }
        };
        let elapsed = start.elapsed();
        self.phase = Phase::Reduced;

        let stats = reducer.into_inner();
        info!(
            "Observed {} distinct pairs in {:.3} s",
            stats.count(),
            elapsed.as_secs_f64()
        );

        self.phase = Phase::Reported;
        Ok(SeparationReport {
            records: n,
            mode: self.config.mode,
            stats,
            elapsed,
            workers,
        })
    }
}

/// Spawn one named scoped thread per plan range and join them all.
fn run_parallel(
    catalog: &Catalog,
    plan: &PartitionPlan,
    dedup: &PairDedupMatrix,
    reducer: &AggregateReducer,
) -> Result<Vec<WorkerSummary>> {
    let uncovered = plan.uncovered();
    if uncovered.len() > 1 {
        warn!(
            "Rows {:?} are not assigned to any worker; pairs among them are skipped",
            uncovered
        );
    } else if !uncovered.is_empty() {
        debug!("Row {} is not assigned to any worker", uncovered.start);
    }

    thread::scope(|s| -> Result<Vec<WorkerSummary>> {
        let mut handles = Vec::with_capacity(plan.workers());
        for (worker, rows) in plan.ranges().iter().cloned().enumerate() {
            let ctx = WorkerContext {
                worker,
                rows,
                catalog,
                dedup,
                sink: reducer,
            };
            let handle = thread::Builder::new()
                .name(format!("angsep-worker-{worker}"))
                .spawn_scoped(s, move || reduce_rows(ctx))
                .map_err(|source| SeparationError::WorkerSpawn { worker, source })?;
            handles.push((worker, handle));
        }

        // Join every handle before reporting the first failure.
        let joined: Vec<Result<WorkerSummary>> = handles
            .into_iter()
            .map(|(worker, handle)| {
                handle
                    .join()
                    .map_err(|_| SeparationError::WorkerPanicked { worker })
            })
            .collect();
        joined.into_iter().collect()
    })
}

/// Convenience wrapper: build a [`Coordinator`] and run it once.
pub fn compute_separation_stats(
    catalog: &Catalog,
    config: &ReductionConfig,
) -> Result<SeparationReport> {
    Coordinator::new(catalog, *config).run()
}
