//! Bit-exact model of glibc's `srand`/`rand`.
//!
//! glibc's default generator is the TYPE_3 additive feedback generator: a
//! 31-word state seeded by the Park-Miller minimal standard generator, with
//! taps 3 apart. Tables built with `srand(seed)` followed by `rand() % (i + 1)`
//! shuffles are reproduced exactly by [`LibcRandom`].

use super::Random;

const DEGREE: usize = 31;
const SEPARATION: usize = 3;
const WARM_UP: usize = DEGREE * 10;

/// glibc-compatible `rand()` stream.
#[derive(Debug, Clone)]
pub struct LibcRandom {
    state: [u32; DEGREE],
    front: usize,
    rear: usize,
}

impl LibcRandom {
    /// Equivalent of `srand(seed)`.
    ///
    /// A seed of 0 is treated as 1, as glibc does.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let seed = if seed == 0 { 1 } else { seed };

        let mut state = [0u32; DEGREE];
        state[0] = seed;
        let mut word = seed as i32;
        for slot in state.iter_mut().skip(1) {
            // Park-Miller without overflow (Schrage's method), truncated to 32 bits.
            let hi = i64::from(word / 127_773);
            let lo = i64::from(word % 127_773);
            word = (16_807 * lo - 2_836 * hi) as i32;
            if word < 0 {
                word = word.wrapping_add(2_147_483_647);
            }
            *slot = word as u32;
        }

        let mut random = Self {
            state,
            front: SEPARATION,
            rear: 0,
        };
        for _ in 0..WARM_UP {
            random.next_u31();
        }
        random
    }

    /// Equivalent of `rand()`: the next value in `0..=i32::MAX`.
    pub fn next_u31(&mut self) -> u32 {
        let value = self.state[self.front].wrapping_add(self.state[self.rear]);
        self.state[self.front] = value;
        self.front = (self.front + 1) % DEGREE;
        self.rear = (self.rear + 1) % DEGREE;
        value >> 1
    }
}

impl Random for LibcRandom {
    fn next_index(&mut self, bound: u32) -> u32 {
        self.next_u31() % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_four(seed: u32) -> [u32; 4] {
        let mut random = LibcRandom::new(seed);
        std::array::from_fn(|_| random.next_u31())
    }

    #[test]
    fn matches_glibc_rand_output() {
        assert_eq!(
            first_four(1),
            [1_804_289_383, 846_930_886, 1_681_692_777, 1_714_636_915]
        );
        assert_eq!(
            first_four(42),
            [71_876_166, 708_592_740, 1_483_128_881, 907_283_241]
        );
    }

    #[test]
    fn zero_seed_behaves_like_one() {
        assert_eq!(first_four(0), first_four(1));
    }

    #[test]
    fn seeds_above_i32_max_wrap_like_glibc() {
        assert_eq!(
            first_four(3_000_000_000),
            [2_058_147_116, 854_483_408, 922_419_988, 286_396_165]
        );
        assert_eq!(
            first_four(u32::MAX),
            [254_925_627, 1_205_188_300, 366_127_624, 1_401_405_153]
        );
    }
}
