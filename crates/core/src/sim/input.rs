//! Input boundary parsing.
//!
//! Reference strings arrive as comma separated text (`"7, 0, 1, 2"`) and frame
//! counts as a separate integer. Everything is rejected here, before an engine
//! could see it: unparsable tokens, empty lists and frame counts below one.

use crate::common::{SimError, SimResult};

/// Parses a comma separated list of page numbers.
///
/// Whitespace around tokens is ignored. An empty token (e.g. from `"1,,2"` or a
/// trailing comma) is a parse error.
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] for blank input and [`SimError::Parse`] for the
/// first token that is not a non-negative integer.
pub fn parse_reference_string(text: &str) -> SimResult<Vec<u64>> {
    if text.trim().is_empty() {
        return Err(SimError::invalid_input("reference string is empty"));
    }
    text.split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<u64>().map_err(|err| SimError::Parse {
                token: token.to_string(),
                reason: err.to_string(),
            })
        })
        .collect()
}

/// Parses a frame count, which must be a positive integer.
///
/// # Errors
///
/// Returns [`SimError::Parse`] for non-numeric text and [`SimError::InvalidInput`]
/// for zero.
pub fn parse_frame_count(text: &str) -> SimResult<usize> {
    let token = text.trim();
    let frames = token.parse::<usize>().map_err(|err| SimError::Parse {
        token: token.to_string(),
        reason: err.to_string(),
    })?;
    if frames == 0 {
        return Err(SimError::invalid_input("frame count must be at least 1"));
    }
    Ok(frames)
}

/// Formats a reference string the way [`parse_reference_string`] reads it.
pub fn format_reference_string(pages: &[u64]) -> String {
    pages
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
