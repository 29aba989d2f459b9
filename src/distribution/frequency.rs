//! Landfall frequency distribution
//!
//! Number of landfalling hurricanes per simulated year, drawn from a Poisson
//! distribution whose mean is the region's annual landfall rate.
//!
//! A rate of exactly 0 means the region never sees a landfall. `rand_distr`
//! rejects a zero Poisson mean, so that case is represented without a
//! distribution and consumes no random numbers.

use super::BatchSampler;
use crate::error::Rule;
use rand::Rng;
use rand_distr::{Distribution, Poisson};

/// Poisson landfall count per simulated year
#[derive(Debug, Clone)]
pub struct LandfallFrequency {
    rate: f64,
    poisson: Option<Poisson<f64>>,
}

impl LandfallFrequency {
    /// Create a frequency distribution with the given annual rate
    ///
    /// Fails if the rate is negative or not a finite number.
    pub fn new(rate: f64) -> Result<Self, Rule> {
        if !rate.is_finite() {
            return Err(Rule::NotANumber);
        }
        if rate < 0.0 {
            return Err(Rule::BelowMinimum { min: 0.0 });
        }

        let poisson = if rate == 0.0 {
            None
        } else {
            Some(Poisson::new(rate).map_err(|_| Rule::NotANumber)?)
        };

        Ok(Self { rate, poisson })
    }

    /// Annual landfall rate
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// True if this region never produces landfalls
    pub fn is_zero(&self) -> bool {
        self.poisson.is_none()
    }

    /// Draw the landfall count of a single simulated year
    #[inline]
    pub fn sample_year<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match &self.poisson {
            Some(poisson) => {
                let count: f64 = poisson.sample(rng);
                count as u64
            }
            None => 0,
        }
    }
}

impl BatchSampler for LandfallFrequency {
    type Output = u64;

    /// Total landfalls over `years` simulated years
    ///
    /// Performs one Poisson draw per year rather than a single draw with mean
    /// `years * rate`. Both have the same distribution.
    fn sample_batch<R: Rng + ?Sized>(&self, rng: &mut R, years: u64) -> u64 {
        if self.poisson.is_none() {
            return 0;
        }
        total_events((0..years).map(|_| self.sample_year(rng)))
    }
}

/// Sum yearly landfall counts, saturating at `u64::MAX`
fn total_events(counts: impl Iterator<Item = u64>) -> u64 {
    counts.fold(0, |total, count| total.saturating_add(count))
}
