//! Noise configuration loaded from JSON5.
//!
//! ```json5
//! {
//!     // reference | lcg | libc | explicit
//!     table: { kind: "lcg", seed: 1234 },
//! }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::noise::{DEFAULT_SEED, OpenSimplexNoise, PermutationTable};

/// Where a noise field's permutation table comes from.
///
/// Tagged by `kind`. A seeded kind without a `seed` uses [`DEFAULT_SEED`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableSource {
    /// Ken Perlin's reference permutation.
    #[default]
    Reference,
    /// Shuffled by the 64-bit LCG.
    Lcg {
        /// Shuffle seed.
        #[serde(default = "default_seed")]
        seed: i64,
    },
    /// Shuffled by glibc's `srand`/`rand`.
    Libc {
        /// Value passed to `srand`.
        #[serde(default = "default_libc_seed")]
        seed: u32,
    },
    /// A table given entry by entry.
    Explicit {
        /// The 256 entries, each in `0..=255`.
        values: Vec<i64>,
    },
}

const fn default_seed() -> i64 {
    DEFAULT_SEED
}

const fn default_libc_seed() -> u32 {
    DEFAULT_SEED as u32
}

impl TableSource {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Lcg { .. } => "lcg",
            Self::Libc { .. } => "libc",
            Self::Explicit { .. } => "explicit",
        }
    }
}

/// Configuration for building noise fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseConfig {
    /// Permutation table source.
    #[serde(default)]
    pub table: TableSource,
}

impl NoiseConfig {
    /// Parse a configuration from JSON5 text.
    pub fn from_json5(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json5::from_str(text)?;
        tracing::debug!(kind = config.table.kind(), "Loaded noise config");
        Ok(config)
    }

    /// Build the configured permutation table.
    ///
    /// Only an explicit table can fail, when it has the wrong length or a
    /// value outside a byte.
    pub fn build_table(&self) -> Result<Arc<PermutationTable>, ConfigError> {
        let table = match &self.table {
            TableSource::Reference => PermutationTable::reference(),
            TableSource::Lcg { seed } => PermutationTable::from_seed(*seed),
            TableSource::Libc { seed } => PermutationTable::from_libc_seed(*seed),
            TableSource::Explicit { values } => PermutationTable::from_values(values)?,
        };
        Ok(Arc::new(table))
    }

    /// Build an `N`-dimensional field over a freshly built table.
    pub fn build<const N: usize>(&self) -> Result<OpenSimplexNoise<N>, ConfigError> {
        Ok(OpenSimplexNoise::with_table(self.build_table()?))
    }
}
