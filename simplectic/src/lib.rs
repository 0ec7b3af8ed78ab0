//! OpenSimplex gradient noise in 2, 3 and 4 dimensions.
//!
//! A noise field is built once from a [`PermutationTable`] (seeded or supplied
//! explicitly) and then evaluated at arbitrary coordinates. Evaluation is a pure
//! function of the table and the point, so a single field can be sampled from
//! any number of threads at once.
//!
//! ```
//! use simplectic::OpenSimplexNoise;
//!
//! let noise = OpenSimplexNoise::<3>::new(1234);
//! let value = noise.eval(0.5, -1.25, 3.0);
//! assert!(value.abs() < 1.1);
//! ```
//!
//! # Modules
//!
//! - [`noise`] - Permutation tables, gradient sets and the per-dimension evaluators
//! - [`random`] - The generators that drive permutation shuffles
//! - [`config`] - Deserializable noise configuration
//! - [`math`] - Small numeric helpers shared by the evaluators

pub mod config;
pub mod error;
pub mod math;
pub mod noise;
pub mod random;

pub use config::{NoiseConfig, TableSource};
pub use error::{ConfigError, TableError};
pub use noise::{DEFAULT_SEED, NoiseFn, OpenSimplexNoise, PermutationTable};
