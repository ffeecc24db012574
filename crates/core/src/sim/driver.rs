//! Run driver.
//!
//! Replays a reference string through any [`ReplacementPolicy`], producing one
//! [`StepRecord`] per reference. After the run the statistics are checked; an
//! inconsistent run is reported as [`SimError::InvariantViolation`] instead of
//! being returned.

use tracing::{debug, trace};

use crate::common::{PageRef, SimError, SimResult};
use crate::engine::ReplacementPolicy;
use crate::stats::{RunResult, StepRecord};

/// Drives `policy` over every reference in `pages`.
///
/// Callers are expected to have validated the input; the driver still refuses to
/// return a run whose resident set outgrew the policy's capacity.
///
/// # Errors
///
/// Returns [`SimError::InvariantViolation`] if a step held more pages than frames,
/// or if the counts do not add up to the reference length.
pub fn simulate<P, R>(policy: &mut R, pages: &[P]) -> SimResult<RunResult<P>>
where
    P: PageRef,
    R: ReplacementPolicy<P> + ?Sized,
{
    let algorithm = policy.algorithm();
    let frames = policy.capacity();
    let mut steps = Vec::with_capacity(pages.len());

    for (index, page) in pages.iter().enumerate() {
        let access = policy.access(pages, index);
        let step = index + 1;

        if policy.resident_len() > frames {
            return Err(SimError::InvariantViolation {
                algorithm,
                detail: format!(
                    "{} pages resident after step {step} with {frames} frames",
                    policy.resident_len()
                ),
            });
        }
        if let Some(victim) = &access.evicted {
            trace!(%algorithm, step, ?page, ?victim, "evicted");
        }

        steps.push(StepRecord {
            step,
            frames: policy.resident(),
            is_hit: access.hit,
            page: page.clone(),
            algorithm,
            evicted: access.evicted,
        });
    }

    let run = RunResult::from_steps(algorithm, frames, steps);
    check_counts(&run, pages.len())?;
    debug!(
        %algorithm,
        faults = run.faults,
        hits = run.hits,
        ratio = %run.hit_ratio,
        "run complete"
    );
    Ok(run)
}

/// Verifies that faults and hits account for every reference exactly once.
///
/// # Errors
///
/// Returns [`SimError::InvariantViolation`] when they do not.
pub fn check_counts<P>(run: &RunResult<P>, reference_len: usize) -> SimResult<()> {
    if run.steps.len() != reference_len {
        return Err(SimError::InvariantViolation {
            algorithm: run.algorithm,
            detail: format!(
                "{} steps recorded for {reference_len} references",
                run.steps.len()
            ),
        });
    }
    if run.faults + run.hits != reference_len {
        return Err(SimError::InvariantViolation {
            algorithm: run.algorithm,
            detail: format!(
                "faults ({}) + hits ({}) != {reference_len} references",
                run.faults, run.hits
            ),
        });
    }
    Ok(())
}
