//! Random distributions for the loss model
//!
//! This module provides the two statistical distributions the simulation draws
//! from. Each region combines them into a [`RegionModel`].
//!
//! # Distributions
//!
//! - **Frequency**: Poisson number of landfalls per simulated year
//! - **Severity**: Log-normal economic loss per landfall
//!
//! # Batch Design
//!
//! Workers never sample one year at a time. A worker asks the frequency
//! distribution for the total event count over its whole batch of years (one
//! Poisson draw per year, summed) and then asks the severity distribution for
//! the summed loss over that many events. Only the sums leave the worker.
//!
//! # Example
//!
//! ```
//! use hurricane_loss::config::{Region, SimulationParameters};
//! use hurricane_loss::distribution::{BatchSampler, RegionModel};
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let params = SimulationParameters {
//!     florida_landfall_rate: 1.0,
//!     florida_mean: 0.0,
//!     florida_stddev: 0.0,
//!     gulf_landfall_rate: 0.0,
//!     gulf_mean: 0.0,
//!     gulf_stddev: 0.0,
//!     samples: 100,
//! };
//!
//! let model = RegionModel::new(Region::Florida, &params).unwrap();
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
//! let events = model.frequency().sample_batch(&mut rng, 100);
//! let loss = model.severity().sample_batch(&mut rng, events);
//!
//! // exp(0) = 1.0 per event
//! assert_eq!(loss, events as f64);
//! ```

pub mod frequency;
pub mod severity;

use crate::config::{Region, SimulationParameters};
use crate::error::SimulationResult;
use frequency::LandfallFrequency;
use rand::Rng;
use severity::LossSeverity;

/// Sampler that draws a whole batch and returns its sum
///
/// Samplers are shared read-only between workers; every worker passes its
/// own random number generator.
pub trait BatchSampler: Send + Sync {
    /// Sum type of the batch (event count or loss)
    type Output;

    /// Draw `n` independent values and return their sum
    fn sample_batch<R: Rng + ?Sized>(&self, rng: &mut R, n: u64) -> Self::Output;
}

/// Frequency and severity distributions of one region
#[derive(Debug, Clone)]
pub struct RegionModel {
    region: Region,
    frequency: LandfallFrequency,
    severity: LossSeverity,
}

impl RegionModel {
    /// Build the model for `region` from validated parameters
    pub fn new(region: Region, params: &SimulationParameters) -> SimulationResult<Self> {
        let p = params.region(region);
        let frequency = LandfallFrequency::new(p.landfall_rate)
            .map_err(|rule| rule.into_error(field_name(region, Field::Rate)))?;
        let severity = LossSeverity::new(p.mean, p.stddev).map_err(|rule| {
            // Only a non-finite mean is rejected; anything else is the stddev
            let field = if p.mean.is_finite() { Field::Stddev } else { Field::Mean };
            rule.into_error(field_name(region, field))
        })?;

        Ok(Self {
            region,
            frequency,
            severity,
        })
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn frequency(&self) -> &LandfallFrequency {
        &self.frequency
    }

    pub fn severity(&self) -> &LossSeverity {
        &self.severity
    }
}

enum Field {
    Rate,
    Mean,
    Stddev,
}

fn field_name(region: Region, field: Field) -> &'static str {
    match (region, field) {
        (Region::Florida, Field::Rate) => "florida_landfall_rate",
        (Region::Florida, Field::Mean) => "florida_mean",
        (Region::Florida, Field::Stddev) => "florida_stddev",
        (Region::Gulf, Field::Rate) => "gulf_landfall_rate",
        (Region::Gulf, Field::Mean) => "gulf_mean",
        (Region::Gulf, Field::Stddev) => "gulf_stddev",
    }
}
