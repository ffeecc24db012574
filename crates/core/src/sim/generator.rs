//! Random reference string generation.
//!
//! Produces short reference strings for experimentation. Lengths and page numbers
//! are drawn uniformly from the ranges in [`GeneratorConfig`]. A xorshift64
//! generator keeps the output reproducible for a given seed.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::common::SimResult;
use crate::config::GeneratorConfig;

/// Seed substituted for zero, which is a fixed point of xorshift.
const FALLBACK_SEED: u64 = 123_456_789;

/// Pseudo-random reference string generator.
#[derive(Debug, Clone)]
pub struct ReferenceGenerator {
    config: GeneratorConfig,
    state: u64,
}

impl ReferenceGenerator {
    /// Creates a generator from `config`.
    ///
    /// Uses `config.seed` when set, otherwise seeds from the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::Config`] if the length range is empty or starts at zero.
    pub fn new(config: GeneratorConfig) -> SimResult<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(clock_seed);
        Ok(Self {
            config,
            state: if seed == 0 { FALLBACK_SEED } else { seed },
        })
    }

    /// Creates a generator from `config` with an explicit seed.
    ///
    /// # Errors
    ///
    /// Same as [`ReferenceGenerator::new`].
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> SimResult<Self> {
        Self::new(GeneratorConfig {
            seed: Some(seed),
            ..config
        })
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform value in `[low, high]`.
    fn between(&mut self, low: u64, high: u64) -> u64 {
        let span = high - low;
        if span == u64::MAX {
            return self.next_u64();
        }
        low + self.next_u64() % (span + 1)
    }

    /// Generates one reference string.
    pub fn generate(&mut self) -> Vec<u64> {
        let len = self.between(
            self.config.min_length as u64,
            self.config.max_length as u64,
        );
        let max_page = self.config.max_page;
        (0..len).map(|_| self.between(0, max_page)).collect()
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(FALLBACK_SEED, |elapsed| elapsed.as_nanos() as u64)
}
