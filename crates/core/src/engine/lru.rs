//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the resident page whose most recent reference lies furthest
//! in the past. Each resident page carries the step index of its last reference.
//!
//! # Frame Order
//!
//! Resident pages are kept in the order they entered memory. When a fault needs a
//! victim, the entries are stably sorted by last use (oldest first) and the head is
//! removed; the new page is then appended. The rendered order is therefore insertion
//! order between evictions and recency order right after one. Last-use stamps are
//! unique step indices, so the sort never sees a tie; if it did, the stable sort
//! would pick the entry that entered memory first.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `access()` on a hit: O(F)
//!   - `access()` on an evicting fault: O(F log F)
//! - **Space Complexity:** O(F)

use super::{Access, Algorithm, ReplacementPolicy};
use crate::common::PageRef;

/// A resident page and the step of its latest reference.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<P> {
    page: P,
    last_use: usize,
}

/// LRU Policy state.
#[derive(Debug, Clone)]
pub struct LruPolicy<P> {
    /// Resident pages in rendering order.
    entries: Vec<Entry<P>>,
    /// Number of frames.
    frames: usize,
}

impl<P: PageRef> LruPolicy<P> {
    /// Creates an empty LRU policy with `frames` frames.
    ///
    /// `frames` must be positive. Zero is not rejected here; [`crate::run`] refuses it
    /// up front, and the driver reports any step that leaves more pages resident than
    /// frames. Storage grows with the resident set, so any frame count is accepted.
    pub fn new(frames: usize) -> Self {
        Self {
            entries: Vec::new(),
            frames,
        }
    }

    /// Step index of the last reference to `page`, if it is resident.
    pub fn last_use(&self, page: &P) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.page == *page)
            .map(|entry| entry.last_use)
    }

    /// Removes and returns the least recently used page.
    fn evict(&mut self) -> Option<P> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.sort_by_key(|entry| entry.last_use);
        Some(self.entries.remove(0).page)
    }
}

impl<P: PageRef> ReplacementPolicy<P> for LruPolicy<P> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lru
    }

    fn capacity(&self) -> usize {
        self.frames
    }

    /// A hit refreshes the page's stamp; a fault at capacity evicts the stalest entry.
    fn access(&mut self, pages: &[P], index: usize) -> Access<P> {
        let page = &pages[index];
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.page == *page) {
            entry.last_use = index;
            return Access::hit();
        }

        let evicted = if self.entries.len() >= self.frames {
            self.evict()
        } else {
            None
        };
        self.entries.push(Entry {
            page: page.clone(),
            last_use: index,
        });
        Access::fault(evicted)
    }

    fn resident(&self) -> Vec<P> {
        self.entries.iter().map(|entry| entry.page.clone()).collect()
    }

    fn resident_len(&self) -> usize {
        self.entries.len()
    }
}
