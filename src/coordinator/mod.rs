//! Coordinator module
//!
//! Orchestrates workers and aggregates results.
//!
//! A run goes through four stages:
//!
//! 1. **Validate** the parameters (nothing is scheduled on failure)
//! 2. **Partition** the requested years evenly across workers
//! 3. **Fan out**: every worker fills its own slot of a pre-sized output
//!    vector on a rayon thread pool
//! 4. **Reduce** the slots in worker order once all workers are done
//!
//! Slots are disjoint by index, so workers never lock anything. The result
//! depends only on the parameters, the worker count and the seed, never on
//! thread scheduling.
//!
//! # Example
//!
//! ```
//! use hurricane_loss::{simulate, RunOptions, SimulationParameters};
//!
//! let params = SimulationParameters {
//!     florida_landfall_rate: 1.0,
//!     florida_mean: 1.0,
//!     florida_stddev: 0.5,
//!     gulf_landfall_rate: 1.0,
//!     gulf_mean: 0.65,
//!     gulf_stddev: 0.23,
//!     samples: 7,
//! };
//! let options = RunOptions { workers: Some(4), seed: Some(42), debug: false };
//!
//! let outcome = simulate(&params, &options)?;
//! assert_eq!(outcome.total_samples_run, 8);
//! println!("Mean annual loss: {}", outcome.mean_loss());
//! # Ok::<(), hurricane_loss::SimulationError>(())
//! ```

use crate::config::validator::validate_parameters;
use crate::config::{Region, RuntimeConfig, SimulationParameters};
use crate::distribution::RegionModel;
use crate::error::{Rule, SimulationError, SimulationResult};
use crate::stats::aggregator::{AggregateLoss, LossAggregator};
use crate::stats::{RegionTotals, SimulationOutcome};
use crate::util::parallelism::{resolve_worker_count, thread_count};
use crate::worker::partition::WorkPartition;
use crate::worker::streams::SeedPolicy;
use crate::worker::{PartialResult, Worker};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Options that control how a simulation is executed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Worker count override (None = host parallelism)
    pub workers: Option<usize>,
    /// Base seed for reproducible runs (None = OS entropy)
    pub seed: Option<u64>,
    /// Print debug diagnostics to stderr
    pub debug: bool,
}

impl From<&RuntimeConfig> for RunOptions {
    fn from(runtime: &RuntimeConfig) -> Self {
        Self {
            workers: runtime.workers,
            seed: runtime.seed,
            debug: runtime.debug,
        }
    }
}

/// Run a simulation and return the total loss and years run
///
/// The mean annual loss is `total_loss / total_samples_run`, see
/// [`SimulationOutcome::mean_loss`].
pub fn simulate(
    params: &SimulationParameters,
    options: &RunOptions,
) -> SimulationResult<SimulationOutcome> {
    Simulation::new(*params, options)?.run()
}

/// Full result of a simulation, as written by the JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// RFC 3339 timestamp of when the run finished
    pub generated_at: String,
    pub parameters: SimulationParameters,
    pub seed: Option<u64>,
    pub worker_count: usize,
    pub samples_per_worker: u64,
    pub requested_samples: u64,
    pub total_samples_run: u64,
    pub total_loss: f64,
    pub mean_loss: f64,
    pub florida: RegionTotals,
    pub gulf: RegionTotals,
    pub elapsed_secs: f64,
}

impl SimulationReport {
    pub fn outcome(&self) -> SimulationOutcome {
        SimulationOutcome {
            total_loss: self.total_loss,
            total_samples_run: self.total_samples_run,
        }
    }
}

/// Validated, partitioned simulation ready to run
#[derive(Debug)]
pub struct Simulation {
    params: SimulationParameters,
    partition: WorkPartition,
    florida: RegionModel,
    gulf: RegionModel,
    seed: Option<u64>,
    debug: bool,
}

impl Simulation {
    /// Validate parameters and plan the run
    ///
    /// Fails with [`SimulationError::InvalidArgument`] naming the first
    /// invalid field.
    pub fn new(params: SimulationParameters, options: &RunOptions) -> SimulationResult<Self> {
        validate_parameters(&params)?;

        let worker_count = resolve_worker_count(options.workers);
        if worker_count == 0 {
            return Err(SimulationError::InvalidArgument {
                field: "workers",
                rule: Rule::BelowMinimum { min: 1.0 },
            });
        }

        // Validated above, so samples >= 1
        let partition = WorkPartition::new(params.samples as u64, worker_count);

        let florida = RegionModel::new(Region::Florida, &params)?;
        let gulf = RegionModel::new(Region::Gulf, &params)?;

        if options.debug {
            eprintln!(
                "DEBUG: {} samples requested, {} workers x {} samples = {} samples",
                partition.requested_samples(),
                partition.worker_count(),
                partition.samples_per_worker(),
                partition.actual_total_samples()
            );
        }

        Ok(Self {
            params,
            partition,
            florida,
            gulf,
            seed: options.seed,
            debug: options.debug,
        })
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn partition(&self) -> &WorkPartition {
        &self.partition
    }

    /// Run all workers and return their results in worker id order
    ///
    /// If any worker fails, the whole run fails with that worker's error.
    pub fn run_workers(&self) -> SimulationResult<Vec<PartialResult>> {
        let worker_count = self.partition.worker_count();
        let years = self.partition.samples_per_worker();
        let rngs = SeedPolicy::from_seed(self.seed).worker_rngs(worker_count);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(thread_count(worker_count))
            .thread_name(|i| format!("loss-worker-{}", i))
            .build()
            .map_err(|e| SimulationError::ThreadPool(e.to_string()))?;

        let mut slots = vec![PartialResult::default(); worker_count];

        pool.install(|| {
            slots
                .par_iter_mut()
                .zip(rngs.into_par_iter())
                .enumerate()
                .try_for_each(|(id, (slot, rng))| {
                    let mut worker = Worker::new(id, years, &self.florida, &self.gulf, rng);
                    *slot = worker.run()?;
                    Ok::<(), SimulationError>(())
                })
        })?;

        if self.debug {
            for result in &slots {
                eprintln!(
                    "DEBUG: worker {} florida_events={} gulf_events={} loss={}",
                    result.worker_id,
                    result.florida.events,
                    result.gulf.events,
                    result.loss()
                );
            }
        }

        Ok(slots)
    }

    /// Run the simulation and return total loss and years run
    pub fn run(&self) -> SimulationResult<SimulationOutcome> {
        let results = self.run_workers()?;
        let aggregate = reduce(results)?;
        Ok(aggregate.outcome())
    }

    /// Run the simulation and return the full report
    pub fn run_report(&self) -> SimulationResult<SimulationReport> {
        let start = Instant::now();
        let results = self.run_workers()?;
        let aggregate = reduce(results)?;
        let elapsed = start.elapsed();

        if self.debug {
            eprintln!("DEBUG: simulation took {:.3}s", elapsed.as_secs_f64());
        }

        let outcome = aggregate.outcome();
        Ok(SimulationReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            parameters: self.params,
            seed: self.seed,
            worker_count: self.partition.worker_count(),
            samples_per_worker: self.partition.samples_per_worker(),
            requested_samples: self.partition.requested_samples(),
            total_samples_run: outcome.total_samples_run,
            total_loss: outcome.total_loss,
            mean_loss: outcome.mean_loss(),
            florida: aggregate.florida,
            gulf: aggregate.gulf,
            elapsed_secs: elapsed.as_secs_f64(),
        })
    }
}

/// Sum worker results in id order
///
/// Fails if the total overflowed even though every partial loss was finite.
fn reduce(results: Vec<PartialResult>) -> SimulationResult<AggregateLoss> {
    let aggregate = LossAggregator::from_results(results).aggregate();
    if !aggregate.total_loss.is_finite() {
        return Err(SimulationError::NonFiniteTotal {
            workers: aggregate.workers,
        });
    }
    Ok(aggregate)
}
