//! FIFO Engine Tests.
//!
//! Frames are rendered oldest first; hits never reorder the queue.

use pagesim_core::engine::{FifoPolicy, ReplacementPolicy};
use pagesim_core::{Algorithm, SimResult, run};
use pretty_assertions::assert_eq;

use crate::common::{BELADY, TEXTBOOK, hit_flags, snapshots};

#[test]
fn belady_string_three_frames_snapshots() -> SimResult<()> {
    assert_eq!(
        snapshots(Algorithm::Fifo, &BELADY, 3)?,
        vec![
            vec![1],
            vec![1, 2],
            vec![1, 2, 3],
            vec![2, 3, 4],
            vec![3, 4, 1],
            vec![4, 1, 2],
            vec![1, 2, 5],
            vec![1, 2, 5],
            vec![1, 2, 5],
            vec![2, 5, 3],
            vec![5, 3, 4],
            vec![5, 3, 4],
        ]
    );
    Ok(())
}

/// More frames, more faults: 9 with three frames, 10 with four.
#[test]
fn belady_anomaly() -> SimResult<()> {
    let three = run(Algorithm::Fifo, &BELADY, 3)?;
    let four = run(Algorithm::Fifo, &BELADY, 4)?;

    assert_eq!(three.faults, 9);
    assert_eq!(four.faults, 10);
    Ok(())
}

#[test]
fn textbook_string_counts() -> SimResult<()> {
    let result = run(Algorithm::Fifo, &TEXTBOOK, 3)?;
    assert_eq!((result.faults, result.hits), (15, 5));
    assert_eq!(result.steps[19].frames, vec![7, 0, 1]);
    Ok(())
}

#[test]
fn evicted_page_is_queue_head() -> SimResult<()> {
    let result = run(Algorithm::Fifo, &BELADY, 3)?;
    let evicted: Vec<Option<u64>> = result.steps.iter().map(|step| step.evicted).collect();

    assert_eq!(
        evicted,
        vec![
            None,
            None,
            None,
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            None,
            None,
            Some(1),
            Some(2),
            None,
        ]
    );
    Ok(())
}

#[test]
fn repeated_runs_are_identical() -> SimResult<()> {
    let first = run(Algorithm::Fifo, &TEXTBOOK, 4)?;
    let second = run(Algorithm::Fifo, &TEXTBOOK, 4)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn policy_reports_capacity_and_occupancy() {
    let pages = [3_u64, 3, 4];
    let mut policy = FifoPolicy::new(2);
    assert_eq!(policy.capacity(), 2);
    assert_eq!(policy.algorithm(), Algorithm::Fifo);

    for index in 0..pages.len() {
        let _ = policy.access(&pages, index);
    }
    assert_eq!(policy.resident_len(), 2);
    assert_eq!(policy.resident(), vec![3, 4]);
}

#[test]
fn hit_flags_follow_membership() -> SimResult<()> {
    let result = run(Algorithm::Fifo, &[1_u64, 2, 1, 3, 1], 2)?;
    assert_eq!(hit_flags(&result), vec![false, false, true, false, false]);
    Ok(())
}
