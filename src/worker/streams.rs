//! Per-worker random number streams
//!
//! Each worker owns a private xoshiro256++ generator. With a fixed seed the
//! generators are reproducible: worker `i` starts from the seed's generator
//! advanced by `i` jumps of 2^128 steps, so the streams never overlap.
//! Without a seed every worker seeds independently from OS entropy.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// How worker generators are seeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Independent seeds from OS entropy (not reproducible)
    #[default]
    Entropy,
    /// Reproducible streams derived from one base seed
    Fixed(u64),
}

impl SeedPolicy {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(SeedPolicy::Entropy, SeedPolicy::Fixed)
    }

    /// One generator per worker, in worker id order
    pub fn worker_rngs(&self, worker_count: usize) -> Vec<Xoshiro256PlusPlus> {
        match *self {
            SeedPolicy::Entropy => (0..worker_count)
                .map(|_| Xoshiro256PlusPlus::from_entropy())
                .collect(),
            SeedPolicy::Fixed(seed) => {
                let mut base = Xoshiro256PlusPlus::seed_from_u64(seed);
                let mut rngs = Vec::with_capacity(worker_count);
                for _ in 0..worker_count {
                    rngs.push(base.clone());
                    base.jump();
                }
                rngs
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_from_seed() {
        assert_eq!(SeedPolicy::from_seed(None), SeedPolicy::Entropy);
        assert_eq!(SeedPolicy::from_seed(Some(9)), SeedPolicy::Fixed(9));
    }

    #[test]
    fn test_worker_rngs_count() {
        assert_eq!(SeedPolicy::Entropy.worker_rngs(6).len(), 6);
        assert_eq!(SeedPolicy::Fixed(1).worker_rngs(6).len(), 6);
    }

    #[test]
    fn test_fixed_streams_reproducible() {
        let mut a = SeedPolicy::Fixed(12345).worker_rngs(4);
        let mut b = SeedPolicy::Fixed(12345).worker_rngs(4);

        for (ra, rb) in a.iter_mut().zip(b.iter_mut()) {
            for _ in 0..10 {
                assert_eq!(ra.gen::<u64>(), rb.gen::<u64>());
            }
        }
    }

    #[test]
    fn test_fixed_streams_distinct() {
        let mut rngs = SeedPolicy::Fixed(42).worker_rngs(8);
        let firsts: Vec<u64> = rngs.iter_mut().map(|r| r.gen::<u64>()).collect();

        for i in 0..firsts.len() {
            for j in (i + 1)..firsts.len() {
                assert_ne!(firsts[i], firsts[j], "workers {} and {} share a stream", i, j);
            }
        }
    }

    #[test]
    fn test_first_worker_uses_base_stream() {
        let mut rngs = SeedPolicy::Fixed(7).worker_rngs(3);
        let mut base = Xoshiro256PlusPlus::seed_from_u64(7);
        assert_eq!(rngs[0].gen::<u64>(), base.gen::<u64>());
    }

    #[test]
    fn test_prefix_stable_across_worker_counts() {
        let mut small = SeedPolicy::Fixed(3).worker_rngs(2);
        let mut large = SeedPolicy::Fixed(3).worker_rngs(5);

        for i in 0..2 {
            assert_eq!(small[i].gen::<u64>(), large[i].gen::<u64>());
        }
    }
}
