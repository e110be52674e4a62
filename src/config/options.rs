//! Command-line or API options for a calculator session.
//!
//! `CalcOptions` carries the initial matrix size, an optional RNG seed for
//! reproducible sessions, and the verbosity switch for logging. It is parsed
//! with clap in the binary and can be built directly in tests.

use crate::error::{MatrixError, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Session options.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "matcalc")]
#[command(about = "Interactive calculator for square integer matrices")]
pub struct CalcOptions {
    /// Initial matrix size; prompted for when absent
    #[arg(long)]
    pub size: Option<usize>,

    /// Seed for the random source, for reproducible matrices
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CalcOptions {
    pub fn validate(&self) -> Result<()> {
        if self.size == Some(0) {
            return Err(MatrixError::InvalidInput("--size must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Random source for the session: seeded if a seed was given, otherwise from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
