//! Loss aggregation
//!
//! This module reduces per-worker partial results into simulation totals.
//! The aggregator keeps the per-worker results so a report can show how the
//! batches were split.
//!
//! # Ordering
//!
//! Floating point addition is not associative. Partial results are always
//! reduced in ascending worker id, so the same partial results give a
//! bit-identical total regardless of the order workers finished in.
//!
//! # Example
//!
//! ```
//! use hurricane_loss::stats::{RegionTotals, aggregator::LossAggregator};
//! use hurricane_loss::worker::PartialResult;
//!
//! let mut aggregator = LossAggregator::new();
//! aggregator.add_worker(PartialResult {
//!     worker_id: 0,
//!     years: 2,
//!     florida: RegionTotals::new(2, 3.0),
//!     gulf: RegionTotals::new(1, 1.5),
//! });
//! aggregator.add_worker(PartialResult {
//!     worker_id: 1,
//!     years: 2,
//!     florida: RegionTotals::new(0, 0.0),
//!     gulf: RegionTotals::new(3, 4.5),
//! });
//!
//! let totals = aggregator.aggregate();
//! assert_eq!(totals.years, 4);
//! assert_eq!(totals.total_loss, 9.0);
//! ```

use crate::stats::{RegionTotals, SimulationOutcome};
use crate::worker::PartialResult;
use std::collections::BTreeMap;

/// Totals across all workers
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregateLoss {
    /// Number of workers merged
    pub workers: usize,
    /// Simulated years across all workers
    pub years: u64,
    /// Sum of every worker's partial loss
    pub total_loss: f64,
    pub florida: RegionTotals,
    pub gulf: RegionTotals,
}

impl AggregateLoss {
    /// Total loss paired with the number of years run
    pub fn outcome(&self) -> SimulationOutcome {
        SimulationOutcome {
            total_loss: self.total_loss,
            total_samples_run: self.years,
        }
    }
}

/// Loss aggregator for multiple workers
///
/// # Usage
///
/// 1. Create aggregator with `new()`
/// 2. Add worker results with `add_worker()`
/// 3. Get totals with `aggregate()`
#[derive(Debug)]
pub struct LossAggregator {
    /// Per-worker results (worker_id → result), ordered by id
    workers: BTreeMap<usize, PartialResult>,

    /// Cached aggregate (computed on demand)
    aggregate_cache: Option<AggregateLoss>,
}

impl LossAggregator {
    /// Create a new loss aggregator
    pub fn new() -> Self {
        Self {
            workers: BTreeMap::new(),
            aggregate_cache: None,
        }
    }

    /// Build an aggregator from a full set of worker results
    pub fn from_results(results: impl IntoIterator<Item = PartialResult>) -> Self {
        let mut aggregator = Self::new();
        for result in results {
            aggregator.add_worker(result);
        }
        aggregator
    }

    /// Add the result of a worker
    ///
    /// A second result with the same worker id replaces the first.
    pub fn add_worker(&mut self, result: PartialResult) {
        self.workers.insert(result.worker_id, result);
        self.aggregate_cache = None;
    }

    /// Get the number of workers
    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }

    /// Get totals across all workers
    ///
    /// The result is cached until another worker is added.
    pub fn aggregate(&mut self) -> AggregateLoss {
        if let Some(cached) = self.aggregate_cache {
            return cached;
        }

        let mut aggregate = AggregateLoss::default();
        for result in self.workers.values() {
            aggregate.workers += 1;
            aggregate.years += result.years;
            aggregate.total_loss += result.loss();
            aggregate.florida += &result.florida;
            aggregate.gulf += &result.gulf;
        }

        self.aggregate_cache = Some(aggregate);
        aggregate
    }

    /// Get the result of a specific worker
    pub fn worker_result(&self, worker_id: usize) -> Option<&PartialResult> {
        self.workers.get(&worker_id)
    }

    /// Iterate worker results in ascending worker id
    pub fn per_worker(&self) -> impl Iterator<Item = &PartialResult> {
        self.workers.values()
    }
}

impl Default for LossAggregator {
    fn default() -> Self {
        Self::new()
    }
}
