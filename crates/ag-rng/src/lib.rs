//! # ag-rng
//!
//! Seeded randomness for the autogram search.
//!
//! Randomness is never drawn from a process-wide source. Every search is
//! handed an explicit [`DeterministicRng`], so any run can be replayed from
//! the seed it logs.
//!
//! ## Usage
//!
//! ```rust
//! use ag_rng::{resolve_seed, DeterministicRng};
//!
//! let seed = resolve_seed(Some(12345)).unwrap();
//! let mut master = DeterministicRng::new(seed);
//! let per_search = master.fork();
//! assert_ne!(per_search.seed(), seed);
//! ```
//!
//! ## Reproducibility
//!
//! To replay a run:
//! ```bash
//! AUTOGRAM_SEED=12345 cargo run --bin autogram
//! ```

pub mod random;

pub use random::DeterministicRng;

use thiserror::Error;

/// Environment variable consulted for a seed.
pub const SEED_ENV_VAR: &str = "AUTOGRAM_SEED";

/// Failure to obtain a seed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The environment variable is set but is not a `u64`.
    #[error("{var}={value:?} is not a valid u64 seed")]
    InvalidEnv {
        /// Variable name
        var: &'static str,
        /// Raw value found
        value: String,
    },
}

/// Pick the seed for a run.
///
/// An explicit seed wins, then `AUTOGRAM_SEED`, then a fresh random one.
/// The chosen seed is always logged so the run can be reproduced.
pub fn resolve_seed(explicit: Option<u64>) -> Result<u64, SeedError> {
    if let Some(seed) = explicit {
        tracing::info!(seed, "using seed (explicit)");
        return Ok(seed);
    }

    match std::env::var(SEED_ENV_VAR) {
        Ok(raw) => {
            let seed = raw.trim().parse::<u64>().map_err(|_| SeedError::InvalidEnv {
                var: SEED_ENV_VAR,
                value: raw.clone(),
            })?;
            tracing::info!(seed, "using seed (from {})", SEED_ENV_VAR);
            Ok(seed)
        }
        Err(_) => {
            let seed = rand::random::<u64>();
            tracing::info!(seed, "using seed (randomly generated)");
            Ok(seed)
        }
    }
}
