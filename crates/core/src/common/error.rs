//! Simulator error definitions.
//!
//! This module defines the failure modes surfaced by the simulator:
//! 1. **Invalid Input:** Empty reference strings or a zero frame count, rejected before
//!    any engine runs.
//! 2. **Parse Failures:** Tokens at the text boundary that are not page numbers.
//! 3. **Invariant Violations:** Statistics that do not add up after a run. Engines are
//!    total over valid input, so this only fires on a logic bug.
//! 4. **Configuration:** Malformed or inconsistent configuration files.

use thiserror::Error;

use crate::engine::Algorithm;

/// Errors produced by the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The reference string or frame count was rejected before simulation.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Human readable explanation of what was rejected.
        reason: String,
    },

    /// A token in a textual reference string or frame count could not be parsed.
    #[error("cannot parse {token:?}: {reason}")]
    Parse {
        /// The offending token, trimmed.
        token: String,
        /// Why the token was rejected.
        reason: String,
    },

    /// A completed run produced inconsistent statistics.
    ///
    /// The run is discarded rather than returned.
    #[error("{algorithm} run violated an invariant: {detail}")]
    InvariantViolation {
        /// Algorithm whose run was aborted.
        algorithm: Algorithm,
        /// Description of the violated invariant.
        detail: String,
    },

    /// The configuration could not be read, parsed or validated.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SimError {
    /// Builds an [`SimError::InvalidInput`] from any displayable reason.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors caused by caller input rather than the simulator.
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::Parse { .. })
    }
}

/// Result alias used across the crate.
pub type SimResult<T> = Result<T, SimError>;
