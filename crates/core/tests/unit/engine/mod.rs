//! Replacement engine tests.

/// FIFO frame order and eviction.
pub mod fifo;


/// Optimal victim selection.
pub mod optimal;
