use std::collections::HashSet;

use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Random input generator for tree scenarios.
///
/// Uses the xoshiro256** PRNG so a run can be replayed from its seed.
///
/// # Examples
///
/// ```
/// use avl_median::fuzzer::Fuzzer;
///
/// let mut fuzzer = Fuzzer::new(Some(7));
/// let values = fuzzer.unique_values(20);
/// assert_eq!(values.len(), 20);
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: u64,
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed is drawn from `OsRng`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| OsRng.next_u64());
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    /// Generate `len` distinct values in draw order.
    ///
    /// The lower bound is picked from [-100, 100] and values are drawn from
    /// a window ten times wider than `len`, so collisions stay rare.
    pub fn unique_values(&mut self, len: usize) -> Vec<i32> {
        let min = self.random_int(-100, 100);
        let span = i32::try_from(len.saturating_mul(10)).unwrap_or(i32::MAX);
        let max = min.saturating_add(span);
        let window = (i64::from(max) - i64::from(min) + 1) as usize;
        let len = len.min(window);

        let mut seen = HashSet::with_capacity(len);
        let mut out = Vec::with_capacity(len);
        while out.len() < len {
            let v = self.random_int(min, max);
            if seen.insert(v) {
                out.push(v);
            }
        }
        out
    }
}
