//! Page replacement simulator library.
//!
//! This crate replays a reference string against a fixed number of memory frames and
//! records every step, for side-by-side comparison of replacement algorithms:
//! 1. **Engines:** FIFO, LRU and Optimal (Belady) replacement policies.
//! 2. **Statistics:** Per-step records, fault/hit counts and hit ratio per run.
//! 3. **Simulation:** The run driver, the three-way comparison, input parsing and
//!    random reference string generation.
//! 4. **Configuration:** JSON-backed defaults for frames, random generation and output.
//!
//! The library performs no rendering; presentation layers consume
//! [`ComparisonResult`] and [`RunResult`] directly.

/// Common types shared across the simulator (page identifiers, errors).
pub mod common;
/// Simulator configuration (defaults, generator and output settings).
pub mod config;
/// Replacement policies and the single-algorithm entry point.
pub mod engine;
/// Simulation driver, comparison, input parsing and reference generation.
pub mod sim;
/// Step records and per-run statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Error type and result alias used throughout the crate.
pub use crate::common::{PageRef, SimError, SimResult};
/// Algorithm selector and the trait every engine implements.
pub use crate::engine::{Algorithm, ReplacementPolicy, run};
/// Three-way comparison entry point.
pub use crate::sim::compare;
/// Result structures consumed by presentation layers.
pub use crate::stats::{ComparisonResult, HitRatio, RunResult, StepRecord};
