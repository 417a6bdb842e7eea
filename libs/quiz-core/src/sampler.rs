//! Question sampling.
//!
//! A run first presents up to `N` distinct records in random order (the fresh
//! pass). When more questions are requested than there are records, the rest
//! are drawn uniformly with replacement from all records (the overflow tail).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Produce `requested` record indices in `[0, record_count)`.
///
/// Returns an empty sequence when either count is zero, or when the index
/// buffer cannot be allocated.
pub fn sample<R: Rng>(record_count: usize, requested: usize, rng: &mut R) -> Vec<usize> {
    if record_count == 0 || requested == 0 {
        return Vec::new();
    }

    let mut slots: Vec<usize> = Vec::new();
    let mut order: Vec<usize> = Vec::new();
    if slots.try_reserve_exact(record_count).is_err() || order.try_reserve_exact(requested).is_err() {
        tracing::warn!(record_count, requested, "failed to allocate sample buffer");
        return Vec::new();
    }
    slots.extend(0..record_count);

    let fresh = requested.min(record_count);
    for i in 0..fresh {
        let j = rng.gen_range(i..record_count);
        slots.swap(i, j);
        order.push(slots[i]);
    }

    // Overflow draws may repeat anything, including the last fresh index.
    for _ in fresh..requested {
        order.push(rng.gen_range(0..record_count));
    }

    tracing::debug!(record_count, requested, fresh, "sampled questions");
    order
}

/// Seeded source of question orderings.
#[derive(Debug, Clone)]
pub struct Sampler {
    seed: u64,
    rng: ChaCha8Rng,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the random sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    pub fn sample(&mut self, record_count: usize, requested: usize) -> Vec<usize> {
        sample(record_count, requested, &mut self.rng)
    }
}
