//! Page identifier bound.
//!
//! Engines never inspect page values; they only compare and copy them. Any
//! type that is comparable, hashable and printable can be used as a page.

use std::fmt::Debug;
use std::hash::Hash;

/// A value usable as a page identifier in a reference string.
///
/// Implemented automatically for every `Clone + Eq + Hash + Debug` type, so
/// `u64`, `u32`, `char` or `String` references all work unchanged.
pub trait PageRef: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> PageRef for T {}
