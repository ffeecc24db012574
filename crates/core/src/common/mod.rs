//! Common types used throughout the page replacement simulator.
//!
//! This module provides the building blocks shared by every engine:
//! 1. **Page Identifiers:** The `PageRef` bound placed on reference string elements.
//! 2. **Error Handling:** The `SimError` taxonomy and the `SimResult` alias.

/// Error types for input validation and invariant checks.
pub mod error;

/// Page identifier bound.
pub mod page;

pub use error::{SimError, SimResult};
pub use page::PageRef;
