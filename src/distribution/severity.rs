//! Loss severity distribution
//!
//! Economic loss of a single landfall, drawn from a log-normal distribution.
//! The mean and standard deviation are those of the loss's logarithm.
//!
//! A standard deviation of 0 makes every loss exactly `exp(mean)`, so a zero
//! mean and zero standard deviation give a loss of 1.0 per event, not 0.
//! Whether any loss occurs at all is decided by the landfall frequency.

use super::BatchSampler;
use crate::error::Rule;
use rand::Rng;
use rand_distr::{Distribution, LogNormal};

/// Log-normal loss per landfall
#[derive(Debug, Clone)]
pub struct LossSeverity {
    mean: f64,
    stddev: f64,
    lognormal: LogNormal<f64>,
}

impl LossSeverity {
    /// Create a severity distribution from log-space mean and standard deviation
    ///
    /// Fails if the standard deviation is negative or either parameter is not
    /// a finite number.
    pub fn new(mean: f64, stddev: f64) -> Result<Self, Rule> {
        if !mean.is_finite() || !stddev.is_finite() {
            return Err(Rule::NotANumber);
        }
        if stddev < 0.0 {
            return Err(Rule::BelowMinimum { min: 0.0 });
        }

        let lognormal = LogNormal::new(mean, stddev).map_err(|_| Rule::NotANumber)?;

        Ok(Self {
            mean,
            stddev,
            lognormal,
        })
    }

    /// Log-space mean
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Log-space standard deviation
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Expected loss of a single event: `exp(mean + stddev^2 / 2)`
    pub fn expected_loss(&self) -> f64 {
        (self.mean + self.stddev * self.stddev / 2.0).exp()
    }

    /// Draw the loss of a single landfall
    #[inline]
    pub fn sample_event<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.lognormal.sample(rng)
    }
}

impl BatchSampler for LossSeverity {
    type Output = f64;

    /// Summed loss over `events` landfalls
    fn sample_batch<R: Rng + ?Sized>(&self, rng: &mut R, events: u64) -> f64 {
        (0..events).map(|_| self.sample_event(rng)).sum()
    }
}
