//! Work partitioning across workers
//!
//! Every worker runs the same whole number of simulated years. The requested
//! sample count is divided by the worker count and rounded up, so the years
//! actually run can exceed the request by up to `worker_count - 1`. Callers
//! must report [`WorkPartition::actual_total_samples`] rather than the request.

/// Equal split of simulated years across workers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkPartition {
    requested_samples: u64,
    worker_count: usize,
    samples_per_worker: u64,
}

impl WorkPartition {
    /// Split `samples` years across `worker_count` workers
    ///
    /// # Panics
    ///
    /// Panics if `worker_count` is 0.
    pub fn new(samples: u64, worker_count: usize) -> Self {
        assert!(worker_count > 0, "Worker count must be at least 1");

        Self {
            requested_samples: samples,
            worker_count,
            samples_per_worker: samples.div_ceil(worker_count as u64),
        }
    }

    /// Years requested by the caller
    pub fn requested_samples(&self) -> u64 {
        self.requested_samples
    }

    /// Number of workers
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Years each worker simulates: `ceil(samples / worker_count)`
    pub fn samples_per_worker(&self) -> u64 {
        self.samples_per_worker
    }

    /// Years run across all workers: `samples_per_worker * worker_count`
    pub fn actual_total_samples(&self) -> u64 {
        self.samples_per_worker * self.worker_count as u64
    }

    /// Extra years run beyond the request because of rounding
    pub fn excess_samples(&self) -> u64 {
        self.actual_total_samples() - self.requested_samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_rounds_up() {
        let p = WorkPartition::new(7, 4);
        assert_eq!(p.samples_per_worker(), 2);
        assert_eq!(p.actual_total_samples(), 8);
        assert_eq!(p.excess_samples(), 1);
    }

    #[test]
    fn test_partition_exact_multiple() {
        let p = WorkPartition::new(8, 4);
        assert_eq!(p.samples_per_worker(), 2);
        assert_eq!(p.actual_total_samples(), 8);
        assert_eq!(p.excess_samples(), 0);
    }

    #[test]
    fn test_partition_fewer_samples_than_workers() {
        let p = WorkPartition::new(1, 16);
        assert_eq!(p.samples_per_worker(), 1);
        assert_eq!(p.actual_total_samples(), 16);
    }

    #[test]
    fn test_partition_single_worker() {
        let p = WorkPartition::new(10_000, 1);
        assert_eq!(p.samples_per_worker(), 10_000);
        assert_eq!(p.actual_total_samples(), 10_000);
    }

    #[test]
    fn test_partition_invariants() {
        for samples in 1..=200u64 {
            for workers in 1..=17usize {
                let p = WorkPartition::new(samples, workers);
                assert!(p.actual_total_samples() >= samples);
                assert_eq!(p.actual_total_samples() % workers as u64, 0);
                assert!(p.excess_samples() < workers as u64);
            }
        }
    }

    #[test]
    #[should_panic(expected = "Worker count must be at least 1")]
    fn test_partition_zero_workers() {
        let _ = WorkPartition::new(10, 0);
    }
}
