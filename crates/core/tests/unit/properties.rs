//! Property Tests.
//!
//! Checks the invariants every run must satisfy over arbitrary reference strings
//! and frame counts.

use pagesim_core::sim::driver::check_counts;
use pagesim_core::{Algorithm, ComparisonResult, compare, run};
use proptest::prelude::*;

fn reference_string() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0_u64..12, 1..60)
}

fn frame_count() -> impl Strategy<Value = usize> {
    1_usize..8
}

fn compare_ok(pages: &[u64], frames: usize) -> Result<ComparisonResult<u64>, TestCaseError> {
    compare(pages, frames).map_err(|err| TestCaseError::fail(err.to_string()))
}

proptest! {
    #[test]
    fn counts_cover_every_reference(pages in reference_string(), frames in frame_count()) {
        let result = compare_ok(&pages, frames)?;
        for run in result.runs() {
            prop_assert_eq!(run.faults + run.hits, pages.len());
            prop_assert_eq!(run.steps.len(), pages.len());
            prop_assert!(check_counts(run, pages.len()).is_ok());
        }
    }

    #[test]
    fn resident_set_never_exceeds_frames(pages in reference_string(), frames in frame_count()) {
        let result = compare_ok(&pages, frames)?;
        for run in result.runs() {
            prop_assert!(run.steps.iter().all(|step| step.frames.len() <= frames));
            prop_assert!(run.peak_resident() <= frames);
        }
    }

    #[test]
    fn referenced_page_is_resident_after_its_step(pages in reference_string(), frames in frame_count()) {
        let result = compare_ok(&pages, frames)?;
        for run in result.runs() {
            for step in &run.steps {
                prop_assert!(step.frames.contains(&step.page));
                let mut sorted = step.frames.clone();
                sorted.sort_unstable();
                sorted.dedup();
                prop_assert_eq!(sorted.len(), step.frames.len());
            }
        }
    }

    #[test]
    fn optimal_never_faults_more(pages in reference_string(), frames in frame_count()) {
        let result = compare_ok(&pages, frames)?;
        prop_assert!(result.optimal.faults <= result.fifo.faults);
        prop_assert!(result.optimal.faults <= result.lru.faults);
    }

    #[test]
    fn runs_are_deterministic(pages in reference_string(), frames in frame_count()) {
        for algorithm in Algorithm::ALL {
            let first = run(algorithm, &pages, frames);
            let second = run(algorithm, &pages, frames);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn ratio_matches_counts(pages in reference_string(), frames in frame_count()) {
        let result = compare_ok(&pages, frames)?;
        for run in result.runs() {
            let exact = run.hits as f64 / pages.len() as f64 * 100.0;
            prop_assert!((run.hit_ratio.percent() - exact).abs() <= 0.005 + 1e-9);
            let hundredths = u64::from(run.hit_ratio.hundredths());
            let len = pages.len() as u64;
            // Round half up: hundredths == floor((2 * hits * 10000 + len) / (2 * len)).
            let doubled = 2 * run.hits as u64 * 10_000 + len;
            prop_assert!(hundredths * 2 * len <= doubled);
            prop_assert!(doubled < (hundredths + 1) * 2 * len);
        }
    }

    #[test]
    fn prefix_steps_do_not_change(pages in reference_string(), frames in frame_count(), cut in 1_usize..60) {
        let cut = cut.min(pages.len());
        for algorithm in [Algorithm::Fifo, Algorithm::Lru] {
            let full = run(algorithm, &pages, frames).map_err(|err| TestCaseError::fail(err.to_string()))?;
            let prefix = run(algorithm, &pages[..cut], frames).map_err(|err| TestCaseError::fail(err.to_string()))?;
            prop_assert_eq!(prefix.steps.as_slice(), &full.steps[..cut]);
        }
    }

    #[test]
    fn faults_equal_distinct_pages_when_frames_suffice(pages in reference_string()) {
        let mut distinct = pages.clone();
        distinct.sort_unstable();
        distinct.dedup();
        let result = compare_ok(&pages, distinct.len())?;
        for run in result.runs() {
            prop_assert_eq!(run.faults, distinct.len());
            prop_assert_eq!(run.evictions(), 0);
        }
    }
}
