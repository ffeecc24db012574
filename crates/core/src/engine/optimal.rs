//! Optimal (Belady) Replacement Policy.
//!
//! This policy evicts the resident page whose next reference lies furthest in the
//! future. It is an oracle: unlike FIFO and LRU it reads the unprocessed suffix of
//! the reference string, and it yields the minimum possible fault count.
//!
//! Victim selection, in order:
//! 1. A page that is never referenced again. The first such page in slot order wins.
//! 2. Otherwise the page with the largest next-use distance.
//!
//! The incoming page takes over the victim's slot, so slots keep their identity
//! across replacements.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `access()` on a hit: O(F)
//!   - `access()` on an evicting fault: O(F × R), where R is the remaining reference length
//! - **Space Complexity:** O(F)

use std::cmp::Reverse;

use super::{Access, Algorithm, ReplacementPolicy};
use crate::common::PageRef;

/// Distance to the next reference of a resident page.
///
/// `Never` orders after every `At`, so it is the preferred victim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NextUse {
    /// Referenced again this many positions into the remaining suffix (0 = next reference).
    At(usize),
    /// Not referenced again.
    Never,
}

impl NextUse {
    /// Finds the next use of `page` in `future`.
    pub fn find<P: PartialEq>(page: &P, future: &[P]) -> Self {
        future
            .iter()
            .position(|candidate| candidate == page)
            .map_or(Self::Never, Self::At)
    }
}

/// Optimal Policy state.
#[derive(Debug, Clone)]
pub struct OptimalPolicy<P> {
    /// Frame slots in fill order.
    slots: Vec<P>,
    /// Number of frames.
    frames: usize,
}

impl<P: PageRef> OptimalPolicy<P> {
    /// Creates an empty Optimal policy with `frames` frames.
    ///
    /// `frames` must be positive. Zero is not rejected here; [`crate::run`] refuses it
    /// up front, and the driver reports any step that leaves more pages resident than
    /// frames. Storage grows with the resident set, so any frame count is accepted.
    pub fn new(frames: usize) -> Self {
        Self {
            slots: Vec::new(),
            frames,
        }
    }

    /// Picks the slot to overwrite given the references still to come.
    ///
    /// Ranks slots by next use (`Never` first, then farthest), breaking ties by the
    /// lowest slot index. Returns `None` only when no slot is occupied.
    pub fn victim_slot(&self, future: &[P]) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .map(|(slot, page)| (slot, NextUse::find(page, future)))
            .min_by_key(|&(slot, next)| (Reverse(next), slot))
            .map(|(slot, _)| slot)
    }
}

impl<P: PageRef> ReplacementPolicy<P> for OptimalPolicy<P> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Optimal
    }

    fn capacity(&self) -> usize {
        self.frames
    }

    fn access(&mut self, pages: &[P], index: usize) -> Access<P> {
        let page = &pages[index];
        if self.slots.contains(page) {
            return Access::hit();
        }

        if self.slots.len() < self.frames {
            self.slots.push(page.clone());
            return Access::fault(None);
        }

        match self.victim_slot(&pages[index + 1..]) {
            Some(slot) => {
                let evicted = std::mem::replace(&mut self.slots[slot], page.clone());
                Access::fault(Some(evicted))
            }
            // Zero frames: nothing to replace, the page cannot be held.
            None => Access::fault(None),
        }
    }

    /// Slot order.
    fn resident(&self) -> Vec<P> {
        self.slots.clone()
    }

    fn resident_len(&self) -> usize {
        self.slots.len()
    }
}
