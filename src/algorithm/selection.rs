//! Seeded random choices shared by vertex generation and tile selection

use crate::algorithm::bitset::CandidateSet;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
///
/// One selector drives a whole generation run, so a seed fixes the vertex
/// fields, every tie-break and every retry.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform choice among candidates, `None` when there are none
    pub fn choose(&mut self, candidates: &CandidateSet) -> Option<usize> {
        let count = candidates.count();
        if count == 0 {
            return None;
        }
        candidates.nth(self.rng.random_range(0..count))
    }

    /// Bernoulli draw; probabilities outside `[0, 1]` saturate
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }

    /// Uniform integer in `min..=max`
    pub fn offset(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}
