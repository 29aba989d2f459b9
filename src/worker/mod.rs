//! Simulation worker
//!
//! This module implements the Worker, the unit of parallel execution. Each
//! worker simulates its own batch of years with its own random stream and
//! produces one [`PartialResult`].
//!
//! # Algorithm
//!
//! For a batch of `years` simulated years a worker:
//!
//! 1. Draws one Poisson landfall count per year for Florida and sums them
//! 2. Does the same for the Gulf states
//! 3. Draws that many log-normal Florida losses and sums them
//! 4. Does the same for the Gulf states
//!
//! Draws always happen in this order, so a seeded stream gives the same
//! partial result every time.
//!
//! # Example
//!
//! ```
//! use hurricane_loss::config::{Region, SimulationParameters};
//! use hurricane_loss::distribution::RegionModel;
//! use hurricane_loss::worker::Worker;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let params = SimulationParameters {
//!     florida_landfall_rate: 1.0,
//!     florida_mean: 1.0,
//!     florida_stddev: 0.5,
//!     gulf_landfall_rate: 1.0,
//!     gulf_mean: 0.65,
//!     gulf_stddev: 0.23,
//!     samples: 1000,
//! };
//! let florida = RegionModel::new(Region::Florida, &params)?;
//! let gulf = RegionModel::new(Region::Gulf, &params)?;
//!
//! let rng = Xoshiro256PlusPlus::seed_from_u64(1);
//! let mut worker = Worker::new(0, 1000, &florida, &gulf, rng);
//! let result = worker.run()?;
//!
//! assert_eq!(result.years, 1000);
//! assert!(result.loss() > 0.0);
//! # Ok::<(), hurricane_loss::SimulationError>(())
//! ```

pub mod partition;
pub mod streams;

use crate::distribution::{BatchSampler, RegionModel};
use crate::error::{SimulationError, SimulationResult};
use crate::stats::RegionTotals;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

/// Output slot of one worker
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialResult {
    pub worker_id: usize,
    /// Simulated years in this worker's batch
    pub years: u64,
    pub florida: RegionTotals,
    pub gulf: RegionTotals,
}

impl PartialResult {
    /// Summed loss of both regions over the batch
    pub fn loss(&self) -> f64 {
        self.florida.loss + self.gulf.loss
    }
}

/// Worker that simulates one batch of years
///
/// Workers share the region models read-only and own their generator, so
/// they never contend with each other.
pub struct Worker<'a> {
    id: usize,
    years: u64,
    florida: &'a RegionModel,
    gulf: &'a RegionModel,
    rng: Xoshiro256PlusPlus,
}

impl<'a> Worker<'a> {
    pub fn new(
        id: usize,
        years: u64,
        florida: &'a RegionModel,
        gulf: &'a RegionModel,
        rng: Xoshiro256PlusPlus,
    ) -> Self {
        Self {
            id,
            years,
            florida,
            gulf,
            rng,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Simulate the batch
    ///
    /// Fails if the summed loss is not finite, which happens when a log-space
    /// mean is large enough for `exp` to overflow.
    pub fn run(&mut self) -> SimulationResult<PartialResult> {
        let florida_events = self.florida.frequency().sample_batch(&mut self.rng, self.years);
        let gulf_events = self.gulf.frequency().sample_batch(&mut self.rng, self.years);

        let florida_loss = self.florida.severity().sample_batch(&mut self.rng, florida_events);
        let gulf_loss = self.gulf.severity().sample_batch(&mut self.rng, gulf_events);

        let result = PartialResult {
            worker_id: self.id,
            years: self.years,
            florida: RegionTotals::new(florida_events, florida_loss),
            gulf: RegionTotals::new(gulf_events, gulf_loss),
        };

        if !result.loss().is_finite() {
            return Err(SimulationError::NonFiniteLoss { worker_id: self.id });
        }

        Ok(result)
    }
}
