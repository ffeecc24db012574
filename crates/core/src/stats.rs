//! Simulation statistics and step records.
//!
//! This module holds everything a run produces. It provides:
//! 1. **Step records:** One immutable record per processed reference (frames, hit flag, victim).
//! 2. **Hit ratio:** Exact hundredths-of-a-percent ratio with round-half-up.
//! 3. **Run results:** Fault/hit counts and steps for one algorithm.
//! 4. **Comparison results:** The FIFO, LRU and Optimal runs over identical input.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::common::PageRef;
use crate::engine::Algorithm;

/// One simulation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord<P> {
    /// 1-based step number.
    pub step: usize,
    /// Resident pages after the step, in the algorithm's rendering order.
    pub frames: Vec<P>,
    /// `true` when the referenced page was already resident.
    pub is_hit: bool,
    /// The referenced page.
    pub page: P,
    /// Algorithm that produced this step.
    pub algorithm: Algorithm,
    /// Page evicted to make room, if any.
    pub evicted: Option<P>,
}

impl<P> StepRecord<P> {
    /// `true` when the reference caused a page fault.
    pub const fn is_fault(&self) -> bool {
        !self.is_hit
    }
}

/// Hit ratio stored as hundredths of a percent (`7500` = 75.00%).
///
/// Computed exactly from integer counts, rounding half up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HitRatio(u32);

impl HitRatio {
    /// Ratio of `hits` over `total` references. Zero references give a zero ratio.
    pub fn from_counts(hits: usize, total: usize) -> Self {
        if total == 0 {
            return Self(0);
        }
        let hits = hits as u128;
        let total = total as u128;
        Self(((hits * 20_000 + total) / (2 * total)) as u32)
    }

    /// Ratio in hundredths of a percent.
    pub const fn hundredths(self) -> u32 {
        self.0
    }

    /// Ratio as a percentage, e.g. `75.0`.
    pub fn percent(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for HitRatio {
    /// Two decimal places, no percent sign. Honors width and alignment.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}.{:02}", self.0 / 100, self.0 % 100))
    }
}

impl Serialize for HitRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.percent())
    }
}

/// Result of running one algorithm over a reference string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult<P> {
    /// Algorithm that produced the run.
    pub algorithm: Algorithm,
    /// Frame count the run used.
    pub frames: usize,
    /// Number of page faults.
    pub faults: usize,
    /// Number of page hits.
    pub hits: usize,
    /// Hits over references, as a percentage.
    pub hit_ratio: HitRatio,
    /// One record per reference, in order.
    pub steps: Vec<StepRecord<P>>,
}

impl<P: PageRef> RunResult<P> {
    /// Assembles a run from its step records, deriving the counts.
    pub fn from_steps(algorithm: Algorithm, frames: usize, steps: Vec<StepRecord<P>>) -> Self {
        let hits = steps.iter().filter(|step| step.is_hit).count();
        let faults = steps.len() - hits;
        Self {
            algorithm,
            frames,
            faults,
            hits,
            hit_ratio: HitRatio::from_counts(hits, steps.len()),
            steps,
        }
    }

    /// Number of references processed.
    pub fn reference_len(&self) -> usize {
        self.steps.len()
    }

    /// Number of faults that displaced a resident page.
    pub fn evictions(&self) -> usize {
        self.steps.iter().filter(|step| step.evicted.is_some()).count()
    }

    /// Largest resident set seen during the run.
    pub fn peak_resident(&self) -> usize {
        self.steps
            .iter()
            .map(|step| step.frames.len())
            .max()
            .unwrap_or(0)
    }
}

/// FIFO, LRU and Optimal runs over the same reference string and frame count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult<P> {
    /// Frame count shared by all runs.
    pub frames: usize,
    /// The reference string shared by all runs.
    pub reference: Vec<P>,
    /// FIFO run.
    pub fifo: RunResult<P>,
    /// LRU run.
    pub lru: RunResult<P>,
    /// Optimal run.
    pub optimal: RunResult<P>,
}

impl<P: PageRef> ComparisonResult<P> {
    /// The run for `algorithm`.
    pub const fn get(&self, algorithm: Algorithm) -> &RunResult<P> {
        match algorithm {
            Algorithm::Fifo => &self.fifo,
            Algorithm::Lru => &self.lru,
            Algorithm::Optimal => &self.optimal,
        }
    }

    /// All three runs in presentation order.
    pub const fn runs(&self) -> [&RunResult<P>; 3] {
        [&self.fifo, &self.lru, &self.optimal]
    }

    /// The causal algorithm (FIFO or LRU) with fewer faults; FIFO on a tie.
    ///
    /// Optimal is left out since it always wins and needs the future.
    pub const fn best_online(&self) -> Algorithm {
        if self.lru.faults < self.fifo.faults {
            Algorithm::Lru
        } else {
            Algorithm::Fifo
        }
    }

    /// Rows of the side-by-side step table: one `[fifo, lru, optimal]` triple per step.
    pub fn step_rows(&self) -> impl Iterator<Item = [&StepRecord<P>; 3]> + '_ {
        self.fifo
            .steps
            .iter()
            .zip(&self.lru.steps)
            .zip(&self.optimal.steps)
            .map(|((fifo, lru), optimal)| [fifo, lru, optimal])
    }
}
