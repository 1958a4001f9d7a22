//! # Bounded-Memory Digit-Stream Search
//!
//! Queries over the infinite string formed by concatenating consecutive
//! integers from a chosen start: starting at 6 the stream begins
//! `678910111213...`.
//!
//! ## Core algorithm
//!
//! 1. **Per-integer generation**: digits are produced one integer at a time
//! 2. **Incremental scan**: the working buffer is scanned after each append
//! 3. **Self-overlap compaction**: a failed scan folds the buffer to the
//!    longest pattern prefix that is one of its suffixes
//! 4. **Absolute positions**: discarded digits are counted, so matches are
//!    reported against the conceptual stream rather than the buffer
//!
//! Result: memory stays `O(len(pattern))` even when the first occurrence
//! lies beyond a billion digits, where the naive accumulate-and-rescan
//! approach becomes impractical.
//!
//! ## Usage example
//!
//! ```
//! use intstrings::{digit_at, first_occurrence};
//!
//! // Stream from 999 begins 999100010011002...
//! assert_eq!(digit_at(999, 11).unwrap(), 1);
//!
//! let found = first_occurrence(1, "123456789").unwrap();
//! assert_eq!((found.start, found.end), (1, 9));
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::len_without_is_empty)]

pub mod search;   // Bounded and naive substring matchers
pub mod stream;   // Digit production and linear positional queries
pub mod wildcard; // Standalone template matcher

// Re-exports for convenience
pub use search::{
    BoundedMatcher, MatchResult, NaiveMatcher, Pattern, PatternError, PrefixTable, SearchError,
};
pub use stream::{count_digit, digit_at, DigitSource, GenerateError};

/// Find the first occurrence of `pattern` in the stream started at `start`.
///
/// Positions are 1-indexed and inclusive over the conceptual stream. Runs
/// the bounded matcher with no digit budget; use
/// [`BoundedMatcher::with_digit_budget`] directly to bound a search that
/// might not converge.
pub fn first_occurrence(start: u64, pattern: &str) -> Result<MatchResult, SearchError> {
    let pattern = Pattern::new(pattern)?;
    BoundedMatcher::new(start, pattern)?.search()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_validates_before_searching() {
        assert!(matches!(
            first_occurrence(0, "123"),
            Err(SearchError::InvalidStart)
        ));
        assert!(matches!(
            first_occurrence(1, ""),
            Err(SearchError::Pattern(PatternError::Empty))
        ));
        assert!(matches!(
            first_occurrence(1, "12x"),
            Err(SearchError::Pattern(PatternError::NonDigit { .. }))
        ));
    }

    #[test]
    fn first_occurrence_reports_match_length() {
        let found = first_occurrence(1, "11111").unwrap();
        assert_eq!(found.len(), 5);
    }
}
