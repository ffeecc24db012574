//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the page that has been resident the longest, regardless of
//! how recently it was referenced. Resident pages form a queue: faults append at
//! the tail and evict from the head, hits leave the queue untouched.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `access()`: O(F) membership scan, where F is the frame count
//! - **Space Complexity:** O(F)
//! - **Worst Case:** Loops slightly larger than memory; also exhibits Belady's anomaly

use std::collections::VecDeque;

use super::{Access, Algorithm, ReplacementPolicy};
use crate::common::PageRef;

/// FIFO Policy state.
#[derive(Debug, Clone)]
pub struct FifoPolicy<P> {
    /// Resident pages, oldest first.
    queue: VecDeque<P>,
    /// Number of frames.
    frames: usize,
}

impl<P: PageRef> FifoPolicy<P> {
    /// Creates an empty FIFO policy with `frames` frames.
    ///
    /// `frames` must be positive. Zero is not rejected here; [`crate::run`] refuses it
    /// up front, and the driver reports any step that leaves more pages resident than
    /// frames. Storage grows with the resident set, so any frame count is accepted.
    pub fn new(frames: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            frames,
        }
    }
}

impl<P: PageRef> ReplacementPolicy<P> for FifoPolicy<P> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fifo
    }

    fn capacity(&self) -> usize {
        self.frames
    }

    /// Hits do not reorder the queue; a fault at capacity pops the head.
    fn access(&mut self, pages: &[P], index: usize) -> Access<P> {
        let page = &pages[index];
        if self.queue.contains(page) {
            return Access::hit();
        }

        let evicted = if self.queue.len() >= self.frames {
            self.queue.pop_front()
        } else {
            None
        };
        self.queue.push_back(page.clone());
        Access::fault(evicted)
    }

    /// Insertion order, oldest first.
    fn resident(&self) -> Vec<P> {
        self.queue.iter().cloned().collect()
    }

    fn resident_len(&self) -> usize {
        self.queue.len()
    }
}
