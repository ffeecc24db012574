//! Optimal Engine Tests.
//!
//! Victims are pages never used again (first slot wins), otherwise the page used
//! farthest in the future. Replacement is in place.

use pagesim_core::engine::{NextUse, OptimalPolicy, ReplacementPolicy};
use pagesim_core::{Algorithm, SimResult, run};
use pretty_assertions::assert_eq;

use crate::common::{BELADY, TEXTBOOK, snapshots};

#[test]
fn belady_string_three_frames_snapshots() -> SimResult<()> {
    assert_eq!(
        snapshots(Algorithm::Optimal, &BELADY, 3)?,
        vec![
            vec![1],
            vec![1, 2],
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 2, 4],
            vec![1, 2, 4],
            vec![1, 2, 5],
            vec![1, 2, 5],
            vec![1, 2, 5],
            vec![3, 2, 5],
            vec![4, 2, 5],
            vec![4, 2, 5],
        ]
    );
    Ok(())
}

#[test]
fn textbook_string_counts() -> SimResult<()> {
    let result = run(Algorithm::Optimal, &TEXTBOOK, 3)?;
    assert_eq!((result.faults, result.hits), (9, 11));
    assert_eq!(result.steps[3].frames, vec![2, 0, 1]);
    assert_eq!(result.steps[7].frames, vec![2, 4, 3]);
    Ok(())
}

#[test]
fn four_frames_beats_three() -> SimResult<()> {
    let result = run(Algorithm::Optimal, &BELADY, 4)?;
    assert_eq!((result.faults, result.hits), (6, 6));
    Ok(())
}

/// Both 1 and 2 are dead; slot 0 holds 1 and is scanned first.
#[test]
fn first_dead_slot_is_evicted() {
    let pages = [1_u64, 2, 3, 4, 3];
    let mut policy = OptimalPolicy::new(3);
    for index in 0..3 {
        let _ = policy.access(&pages, index);
    }

    assert_eq!(policy.victim_slot(&pages[4..]), Some(0));
    let access = policy.access(&pages, 3);
    assert!(!access.hit);
    assert_eq!(access.evicted, Some(1));
    assert_eq!(policy.resident(), vec![4, 2, 3]);
}

/// A dead page loses to no live page, however far away its next use.
#[test]
fn never_used_again_beats_far_future() {
    let pages = [1_u64, 2, 3, 9, 9, 9, 9, 9, 1];
    let mut policy = OptimalPolicy::new(2);
    let _ = policy.access(&pages, 0);
    let _ = policy.access(&pages, 1);

    let access = policy.access(&pages, 2);
    assert_eq!(access.evicted, Some(2));
    assert_eq!(policy.resident(), vec![1, 3]);
}

#[test]
fn next_use_distance() {
    let future = [4_u64, 5, 6, 4];
    assert_eq!(NextUse::find(&4, &future), NextUse::At(0));
    assert_eq!(NextUse::find(&6, &future), NextUse::At(2));
    assert_eq!(NextUse::find(&7, &future), NextUse::Never);
    assert_eq!(NextUse::find(&7, &[]), NextUse::Never);
}

#[test]
fn last_reference_evicts_first_slot() -> SimResult<()> {
    // Nothing follows the final reference, so every resident page is dead.
    let result = run(Algorithm::Optimal, &[1_u64, 2, 3], 2)?;
    assert_eq!(result.steps[2].evicted, Some(1));
    assert_eq!(result.steps[2].frames, vec![3, 2]);
    Ok(())
}
