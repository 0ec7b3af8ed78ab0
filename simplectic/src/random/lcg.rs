//! 64-bit linear congruential generator used for seeded permutation tables.

use super::Random;

const MULTIPLIER: i64 = 6_364_136_223_846_793_005;
const INCREMENT: i64 = 1_442_695_040_888_963_407;

/// Knuth's MMIX LCG with the index derivation used by OpenSimplex seeding.
#[derive(Debug, Clone)]
pub struct Lcg {
    seed: i64,
}

impl Lcg {
    /// Create a generator from a seed.
    ///
    /// The state is advanced three times up front so that low-entropy seeds
    /// (0, 1, 2, ...) do not produce visibly related tables.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        let mut lcg = Self { seed };
        lcg.step();
        lcg.step();
        lcg.step();
        lcg
    }

    #[inline]
    const fn step(&mut self) {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
    }

    /// Current internal state.
    #[must_use]
    pub const fn state(&self) -> i64 {
        self.seed
    }
}

impl Random for Lcg {
    fn next_index(&mut self, bound: u32) -> u32 {
        self.step();
        let bound = i64::from(bound);
        // Truncating remainder on the signed state, pulled back into range.
        let r = self.seed.wrapping_add(31) % bound;
        (if r < 0 { r + bound } else { r }) as u32
    }
}
