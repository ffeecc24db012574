//! Page Replacement Engines.
//!
//! Implements the algorithms that decide which resident page leaves memory when a
//! referenced page is absent and every frame is occupied.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out (queue order).
//! - `Lru`: Least Recently Used (last-reference step).
//! - `Optimal`: Belady's algorithm (farthest next use, needs the future).
//!
//! Every policy owns its resident set exclusively. A fresh instance is built for
//! each run, so runs over the same input never share state.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::{PageRef, SimError, SimResult};
use crate::sim::{driver, validate};
use crate::stats::RunResult;

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Optimal (Belady) replacement policy.
pub mod optimal;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use optimal::{NextUse, OptimalPolicy};

/// Replacement algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Algorithm {
    /// First-In, First-Out.
    #[serde(rename = "FIFO")]
    Fifo,
    /// Least Recently Used.
    #[serde(rename = "LRU")]
    Lru,
    /// Belady's optimal algorithm.
    Optimal,
}

impl Algorithm {
    /// All algorithms in presentation order.
    pub const ALL: [Self; 3] = [Self::Fifo, Self::Lru, Self::Optimal];

    /// Display name used in step records and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            "optimal" | "opt" | "belady" => Ok(Self::Optimal),
            other => Err(SimError::Parse {
                token: other.to_string(),
                reason: "expected one of fifo, lru, optimal".to_string(),
            }),
        }
    }
}

/// Outcome of presenting one reference to a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Access<P> {
    /// `true` when the page was already resident.
    pub hit: bool,
    /// Page removed from memory to make room, if any.
    pub evicted: Option<P>,
}

impl<P> Access<P> {
    /// A reference that found its page resident.
    pub const fn hit() -> Self {
        Self {
            hit: true,
            evicted: None,
        }
    }

    /// A reference that faulted, optionally displacing `evicted`.
    pub const fn fault(evicted: Option<P>) -> Self {
        Self {
            hit: false,
            evicted,
        }
    }
}

/// Trait for page replacement policies.
///
/// Defines how a policy consumes one reference and exposes its resident set.
pub trait ReplacementPolicy<P: PageRef> {
    /// The algorithm this policy implements.
    fn algorithm(&self) -> Algorithm;

    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;

    /// Processes the reference at `pages[index]`.
    ///
    /// # Arguments
    ///
    /// * `pages` - The complete reference string. Only the Optimal policy looks past `index`.
    /// * `index` - Zero-based position of the current reference.
    ///
    /// # Returns
    ///
    /// Whether the reference hit, and the page evicted to serve it.
    fn access(&mut self, pages: &[P], index: usize) -> Access<P>;

    /// Snapshot of the resident pages in the policy's rendering order.
    fn resident(&self) -> Vec<P>;

    /// Number of pages currently resident.
    fn resident_len(&self) -> usize;
}

/// Runs a single algorithm over `pages` with `frames` frames.
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] for an empty reference string or zero frames,
/// and [`SimError::InvariantViolation`] if the run's statistics are inconsistent.
pub fn run<P: PageRef>(algorithm: Algorithm, pages: &[P], frames: usize) -> SimResult<RunResult<P>> {
    validate(pages, frames)?;
    match algorithm {
        Algorithm::Fifo => driver::simulate(&mut FifoPolicy::new(frames), pages),
        Algorithm::Lru => driver::simulate(&mut LruPolicy::new(frames), pages),
        Algorithm::Optimal => driver::simulate(&mut OptimalPolicy::new(frames), pages),
    }
}
