//! Loss statistics
//!
//! This module holds the per-region totals that workers produce and the
//! aggregator that reduces them into a single simulation outcome.
//!
//! Only sums are kept. Individual simulated years are never stored.

pub mod aggregator;

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Landfall count and summed loss for one region
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionTotals {
    /// Number of landfalls drawn
    pub events: u64,
    /// Sum of the losses of those landfalls
    pub loss: f64,
}

impl RegionTotals {
    pub fn new(events: u64, loss: f64) -> Self {
        Self { events, loss }
    }

    /// Merge another region's totals into this one
    pub fn merge(&mut self, other: &RegionTotals) {
        self.events = self.events.saturating_add(other.events);
        self.loss += other.loss;
    }

    /// Average loss per landfall (0 if no landfalls)
    pub fn mean_loss_per_event(&self) -> f64 {
        if self.events == 0 {
            0.0
        } else {
            self.loss / self.events as f64
        }
    }
}

impl AddAssign<&RegionTotals> for RegionTotals {
    fn add_assign(&mut self, other: &RegionTotals) {
        self.merge(other);
    }
}

/// Total loss and number of simulated years actually run
///
/// `total_samples_run` can exceed the requested sample count because work is
/// split evenly across workers and rounded up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub total_loss: f64,
    pub total_samples_run: u64,
}

impl SimulationOutcome {
    /// Expected annual loss estimate: `total_loss / total_samples_run`
    pub fn mean_loss(&self) -> f64 {
        self.total_loss / self.total_samples_run as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_totals_merge() {
        let mut a = RegionTotals::new(3, 4.5);
        let b = RegionTotals::new(2, 1.5);
        a.merge(&b);
        assert_eq!(a.events, 5);
        assert_eq!(a.loss, 6.0);

        a += &RegionTotals::new(1, 0.25);
        assert_eq!(a.events, 6);
        assert_eq!(a.loss, 6.25);
    }

    #[test]
    fn test_region_totals_merge_saturates_events() {
        let mut a = RegionTotals::new(u64::MAX - 1, 1.0);
        a.merge(&RegionTotals::new(10, 1.0));
        assert_eq!(a.events, u64::MAX);
        assert_eq!(a.loss, 2.0);
    }

    #[test]
    fn test_mean_loss_per_event() {
        assert_eq!(RegionTotals::default().mean_loss_per_event(), 0.0);
        assert_eq!(RegionTotals::new(4, 10.0).mean_loss_per_event(), 2.5);
    }

    #[test]
    fn test_outcome_mean_loss() {
        let outcome = SimulationOutcome {
            total_loss: 40.0,
            total_samples_run: 8,
        };
        assert_eq!(outcome.mean_loss(), 5.0);

        let zero = SimulationOutcome {
            total_loss: 0.0,
            total_samples_run: 10_000,
        };
        assert_eq!(zero.mean_loss(), 0.0);
    }
}
