//! Substring search over the concatenated-integer digit stream.
//!
//! Two matchers share one contract: report the 1-indexed inclusive span of
//! the first occurrence of a digit pattern. [`BoundedMatcher`] holds a
//! buffer shorter than the pattern between iterations; [`NaiveMatcher`]
//! accumulates the whole stream and exists only as a correctness oracle.

mod bounded;
mod naive;
mod pattern;

pub use bounded::BoundedMatcher;
pub use naive::NaiveMatcher;
pub use pattern::{Pattern, PatternError, PrefixTable};

use thiserror::Error;

/// Absolute 1-indexed inclusive span of the first pattern occurrence.
///
/// `end - start + 1` always equals the pattern length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    /// Position of the first digit of the match.
    pub start: u64,
    /// Position of the last digit of the match.
    pub end: u64,
}

impl MatchResult {
    /// Number of digits covered by the match.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// Errors that can occur while searching the stream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Starting integer was zero.
    #[error("starting integer must be at least 1")]
    InvalidStart,

    /// Pattern failed validation.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// The optional digit budget ran out before a match was found.
    #[error("search exhausted its budget of {budget} digits after generating {digits_generated}")]
    BudgetExhausted {
        /// Maximum digits the search was allowed to generate.
        budget: u64,
        /// Digits actually generated when the search gave up.
        digits_generated: u64,
    },
}
