//! Errors returned at the fallible edges of the crate.
//!
//! Evaluation and seeded construction are total. Only explicit tables given as
//! arbitrary slices and configuration text can be rejected.

use thiserror::Error;

/// An explicit permutation table that cannot be stored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table does not have exactly 256 entries.
    #[error("Permutation table must have 256 entries, got {len}")]
    Length {
        /// Number of entries supplied.
        len: usize,
    },
    /// An entry does not fit in a byte.
    #[error("Permutation entry {index} is {value}, expected a value in 0..=255")]
    OutOfRange {
        /// Position of the offending entry.
        index: usize,
        /// The offending value.
        value: i64,
    },
}

/// An error that can occur while loading a noise configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration text is not valid JSON5 for [`NoiseConfig`](crate::NoiseConfig).
    #[error("Failed to parse noise config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The configured explicit table was rejected.
    #[error("Invalid permutation table: {0}")]
    Table(#[from] TableError),
}
