//! Simulation control.
//!
//! Provides the driver that replays a reference string through a replacement
//! policy, the three-way comparison, and the helpers that sit at the input
//! boundary (text parsing and random reference strings).

/// Generic run loop and invariant checks.
pub mod driver;

/// Random reference string generation.
pub mod generator;

/// Parsing of textual reference strings and frame counts.
pub mod input;

pub use generator::ReferenceGenerator;
pub use input::{parse_frame_count, parse_reference_string};

use tracing::debug;

use crate::common::{PageRef, SimError, SimResult};
use crate::engine::{FifoPolicy, LruPolicy, OptimalPolicy};
use crate::stats::ComparisonResult;

/// Rejects input no engine should see: an empty reference string or zero frames.
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] describing the first problem found.
pub fn validate<P>(pages: &[P], frames: usize) -> SimResult<()> {
    if pages.is_empty() {
        return Err(SimError::invalid_input("reference string is empty"));
    }
    if frames == 0 {
        return Err(SimError::invalid_input("frame count must be at least 1"));
    }
    Ok(())
}

/// Runs FIFO, LRU and Optimal over the same reference string.
///
/// Each engine gets its own freshly allocated resident set.
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] before any engine runs if the input is
/// rejected, or [`SimError::InvariantViolation`] if any run is inconsistent.
pub fn compare<P: PageRef>(pages: &[P], frames: usize) -> SimResult<ComparisonResult<P>> {
    validate(pages, frames)?;
    debug!(frames, references = pages.len(), "comparing replacement algorithms");

    let fifo = driver::simulate(&mut FifoPolicy::new(frames), pages)?;
    let lru = driver::simulate(&mut LruPolicy::new(frames), pages)?;
    let optimal = driver::simulate(&mut OptimalPolicy::new(frames), pages)?;

    Ok(ComparisonResult {
        frames,
        reference: pages.to_vec(),
        fifo,
        lru,
        optimal,
    })
}
