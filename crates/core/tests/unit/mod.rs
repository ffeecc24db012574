//! # Unit Components
//!
//! Tests for every part of the simulator, from individual replacement engines
//! up to the three-way comparison.




/// Replacement engine tests (FIFO, LRU, Optimal).
pub mod engine;

/// Random reference string generation.
pub mod generator;


/// Property tests over arbitrary reference strings.
pub mod properties;
