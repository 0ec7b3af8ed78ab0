//! OpenSimplex noise over a shared permutation table.
//!
//! - [`PermutationTable`] - The 256-entry lattice hash, seeded or explicit
//! - [`OpenSimplexNoise`] - The evaluator, one instantiation per dimension
//! - [`NoiseFn`] - Point sampling over `[f64; N]`, for code generic over dimension
//!
//! Every evaluator follows the same outline: stretch the input onto the skewed
//! lattice, pick the simplex region from the fractional coordinates, then sum
//! the attenuated gradient ramps of each contributing vertex.

mod open_simplex;
mod open_simplex_2d;
mod open_simplex_3d;
mod open_simplex_4d;
mod permutation;

pub use open_simplex::{DEFAULT_SEED, NoiseFn, OpenSimplexNoise};
pub use permutation::{PermutationTable, REFERENCE_PERMUTATION};

/// The 8 gradients of the 2D lattice, pointing at the edges and corners of an
/// octagon. Selected by `perm & 0x0E`.
#[rustfmt::skip]
pub(crate) const GRADIENTS_2D: [i8; 16] = [
     5,  2,    2,  5,
    -5,  2,   -2,  5,
     5, -2,    2, -5,
    -5, -2,   -2, -5,
];

/// The 24 gradients of the 3D lattice, pointing at the midpoints of the edges
/// of a truncated cube. Selected through the table's precomputed 3D row index.
#[rustfmt::skip]
pub(crate) const GRADIENTS_3D: [i8; 72] = [
     0,  3,  2,    0,  2,  3,    3,  0,  2,    2,  0,  3,    3,  2,  0,    2,  3,  0,
     0, -3,  2,    0,  2, -3,   -3,  0,  2,    2,  0, -3,   -3,  2,  0,    2, -3,  0,
     0,  3, -2,    0, -2,  3,    3,  0, -2,   -2,  0,  3,    3, -2,  0,   -2,  3,  0,
     0, -3, -2,    0, -2, -3,   -3,  0, -2,   -2,  0, -3,   -3, -2,  0,   -2, -3,  0,
];

/// The 64 gradients of the 4D lattice, pointing at the vertices of a
/// disprismatotesseractihexadecachoron. Selected by `perm & 0xFC`.
#[rustfmt::skip]
pub(crate) const GRADIENTS_4D: [i8; 256] = [
     3,  1,  1,  1,   1,  3,  1,  1,   1,  1,  3,  1,   1,  1,  1,  3,
    -3,  1,  1,  1,  -1,  3,  1,  1,  -1,  1,  3,  1,  -1,  1,  1,  3,
     3, -1,  1,  1,   1, -3,  1,  1,   1, -1,  3,  1,   1, -1,  1,  3,
    -3, -1,  1,  1,  -1, -3,  1,  1,  -1, -1,  3,  1,  -1, -1,  1,  3,
     3,  1, -1,  1,   1,  3, -1,  1,   1,  1, -3,  1,   1,  1, -1,  3,
    -3,  1, -1,  1,  -1,  3, -1,  1,  -1,  1, -3,  1,  -1,  1, -1,  3,
     3, -1, -1,  1,   1, -3, -1,  1,   1, -1, -3,  1,   1, -1, -1,  3,
    -3, -1, -1,  1,  -1, -3, -1,  1,  -1, -1, -3,  1,  -1, -1, -1,  3,
     3,  1,  1, -1,   1,  3,  1, -1,   1,  1,  3, -1,   1,  1,  1, -3,
    -3,  1,  1, -1,  -1,  3,  1, -1,  -1,  1,  3, -1,  -1,  1,  1, -3,
     3, -1,  1, -1,   1, -3,  1, -1,   1, -1,  3, -1,   1, -1,  1, -3,
    -3, -1,  1, -1,  -1, -3,  1, -1,  -1, -1,  3, -1,  -1, -1,  1, -3,
     3,  1, -1, -1,   1,  3, -1, -1,   1,  1, -3, -1,   1,  1, -1, -3,
    -3,  1, -1, -1,  -1,  3, -1, -1,  -1,  1, -3, -1,  -1,  1, -1, -3,
     3, -1, -1, -1,   1, -3, -1, -1,   1, -1, -3, -1,   1, -1, -1, -3,
    -3, -1, -1, -1,  -1, -3, -1, -1,  -1, -1, -3, -1,  -1, -1, -1, -3,
];
