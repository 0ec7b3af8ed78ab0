//! The 256-entry permutation table that hashes lattice points to gradients.

use crate::error::TableError;
use crate::random::{Lcg, LibcRandom, Random};

use super::{GRADIENTS_2D, GRADIENTS_3D, GRADIENTS_4D};

const TABLE_SIZE: usize = 256;

/// Ken Perlin's reference permutation, the table used when no seed is given.
#[rustfmt::skip]
pub const REFERENCE_PERMUTATION: [u8; TABLE_SIZE] = [
    151, 160, 137,  91,  90,  15, 131,  13, 201,  95,  96,  53, 194, 233,   7, 225,
    140,  36, 103,  30,  69, 142,   8,  99,  37, 240,  21,  10,  23, 190,   6, 148,
    247, 120, 234,  75,   0,  26, 197,  62,  94, 252, 219, 203, 117,  35,  11,  32,
     57, 177,  33,  88, 237, 149,  56,  87, 174,  20, 125, 136, 171, 168,  68, 175,
     74, 165,  71, 134, 139,  48,  27, 166,  77, 146, 158, 231,  83, 111, 229, 122,
     60, 211, 133, 230, 220, 105,  92,  41,  55,  46, 245,  40, 244, 102, 143,  54,
     65,  25,  63, 161,   1, 216,  80,  73, 209,  76, 132, 187, 208,  89,  18, 169,
    200, 196, 135, 130, 116, 188, 159,  86, 164, 100, 109, 198, 173, 186,   3,  64,
     52, 217, 226, 250, 124, 123,   5, 202,  38, 147, 118, 126, 255,  82,  85, 212,
    207, 206,  59, 227,  47,  16,  58,  17, 182, 189,  28,  42, 223, 183, 170, 213,
    119, 248, 152,   2,  44, 154, 163,  70, 221, 153, 101, 155, 167,  43, 172,   9,
    129,  22,  39, 253,  19,  98, 108, 110,  79, 113, 224, 232, 178, 185, 112, 104,
    218, 246,  97, 228, 251,  34, 242, 193, 238, 210, 144,  12, 191, 179, 162, 241,
     81,  51, 145, 235, 249,  14, 239, 107,  49, 192, 214,  31, 181, 199, 106, 157,
    184,  84, 204, 176, 115, 121,  50,  45, 127,   4, 150, 254, 138, 236, 205,  93,
    222, 114,  67,  29,  24,  72, 243, 141, 128, 195,  78,  66, 215,  61, 156, 180,
];

/// Immutable permutation of `0..=255` plus the derived 3D gradient row index.
///
/// Tables built from a seed are always bijections. Explicit tables are stored
/// as given; every lookup is masked to a byte, so a table that repeats values
/// only degrades the noise and never panics.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; TABLE_SIZE],
    grad_index_3d: [u8; TABLE_SIZE],
}

impl PermutationTable {
    /// Shuffle a table with the 64-bit LCG seeding scheme.
    #[must_use]
    pub fn from_seed(seed: i64) -> Self {
        tracing::debug!(seed, "Building permutation table from LCG seed");
        Self::shuffled(&mut Lcg::new(seed))
    }

    /// Shuffle a table with glibc's `srand(seed)`/`rand()` stream.
    #[must_use]
    pub fn from_libc_seed(seed: u32) -> Self {
        tracing::debug!(seed, "Building permutation table from libc seed");
        Self::shuffled(&mut LibcRandom::new(seed))
    }

    /// Fisher-Yates shuffle of the identity driven by `random`.
    ///
    /// Slots are filled from the top down; slot `i` takes a value drawn from
    /// the `i + 1` not yet placed.
    pub fn shuffled<R: Random>(random: &mut R) -> Self {
        let mut source: [u8; TABLE_SIZE] = std::array::from_fn(|i| i as u8);
        let mut perm = [0u8; TABLE_SIZE];
        for i in (0..TABLE_SIZE).rev() {
            let r = random.next_index(i as u32 + 1) as usize;
            perm[i] = source[r];
            source[r] = source[i];
        }
        Self::from_perm(&perm)
    }

    /// Use `perm` verbatim.
    ///
    /// The caller is responsible for passing a bijection; see
    /// [`is_bijection`](Self::is_bijection).
    #[must_use]
    pub fn from_perm(perm: &[u8; TABLE_SIZE]) -> Self {
        let rows_3d = (GRADIENTS_3D.len() / 3) as u8;
        let grad_index_3d = perm.map(|p| (p % rows_3d) * 3);
        Self {
            perm: *perm,
            grad_index_3d,
        }
    }

    /// Use an arbitrary integer slice as the table.
    ///
    /// Fails if the slice is not exactly 256 long or holds a value outside a
    /// byte. Repeated values are accepted.
    pub fn from_values(values: &[i64]) -> Result<Self, TableError> {
        if values.len() != TABLE_SIZE {
            return Err(TableError::Length { len: values.len() });
        }
        let mut perm = [0u8; TABLE_SIZE];
        for (index, (slot, &value)) in perm.iter_mut().zip(values).enumerate() {
            *slot = u8::try_from(value).map_err(|_| TableError::OutOfRange { index, value })?;
        }
        tracing::debug!(
            bijection = is_bijection(&perm),
            "Using explicit permutation table"
        );
        Ok(Self::from_perm(&perm))
    }

    /// Ken Perlin's reference ordering.
    #[must_use]
    pub fn reference() -> Self {
        Self::from_perm(&REFERENCE_PERMUTATION)
    }

    /// The stored permutation.
    #[must_use]
    pub const fn perm(&self) -> &[u8; TABLE_SIZE] {
        &self.perm
    }

    /// Offsets of each slot's 3D gradient row in the flattened 3D gradient set.
    #[must_use]
    pub const fn grad_index_3d(&self) -> &[u8; TABLE_SIZE] {
        &self.grad_index_3d
    }

    /// Whether every value in `0..=255` appears exactly once.
    #[must_use]
    pub fn is_bijection(&self) -> bool {
        is_bijection(&self.perm)
    }

    /// Chain the lattice coordinates through the table, one lookup per axis
    /// after the first.
    #[inline]
    fn hash<const N: usize>(&self, lattice: [i64; N]) -> usize {
        let mut index = (lattice[0] & 0xFF) as usize;
        for &coord in &lattice[1..] {
            index = (usize::from(self.perm[index]) + (coord & 0xFF) as usize) & 0xFF;
        }
        index
    }

    #[inline]
    pub(crate) fn gradient_2d(&self, lattice: [i64; 2]) -> &'static [i8] {
        let row = usize::from(self.perm[self.hash(lattice)] & 0x0E);
        &GRADIENTS_2D[row..row + 2]
    }

    #[inline]
    pub(crate) fn gradient_3d(&self, lattice: [i64; 3]) -> &'static [i8] {
        let row = usize::from(self.grad_index_3d[self.hash(lattice)]);
        &GRADIENTS_3D[row..row + 3]
    }

    #[inline]
    pub(crate) fn gradient_4d(&self, lattice: [i64; 4]) -> &'static [i8] {
        let row = usize::from(self.perm[self.hash(lattice)] & 0xFC);
        &GRADIENTS_4D[row..row + 4]
    }
}

fn is_bijection(perm: &[u8; TABLE_SIZE]) -> bool {
    let mut seen = [false; TABLE_SIZE];
    for &p in perm {
        seen[usize::from(p)] = true;
    }
    seen.iter().all(|&s| s)
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::reference()
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

impl TryFrom<&[i64]> for PermutationTable {
    type Error = TableError;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<&[u8; TABLE_SIZE]> for PermutationTable {
    fn from(perm: &[u8; TABLE_SIZE]) -> Self {
        Self::from_perm(perm)
    }
}
