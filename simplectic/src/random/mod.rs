//! Random sources used to shuffle permutation tables.
//!
//! Neither generator is suitable for anything security related; both exist so
//! that a seed always produces the same table on every platform.
//!
//! - [`Lcg`] - 64-bit linear congruential generator, the default seeding scheme
//! - [`LibcRandom`] - Model of glibc `srand`/`rand`, for tables built by `rand()` seeding

pub mod lcg;
pub mod libc_random;

pub use lcg::Lcg;
pub use libc_random::LibcRandom;

/// A source of shuffle indices.
pub trait Random {
    /// Draw an index in `0..bound`.
    ///
    /// `bound` is always at least 1.
    fn next_index(&mut self, bound: u32) -> u32;
}
