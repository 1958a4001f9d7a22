//! Unbounded reference matcher.
//!
//! Accumulates the full stream string and rescans it after every appended
//! integer. Correct but costs memory and time proportional to the absolute
//! match position, which reaches billions of digits in realistic queries.
//! Kept as an independent oracle for cross-checking the bounded matcher on
//! small and medium inputs.

use super::bounded::find_first;
use super::{MatchResult, Pattern, SearchError};
use crate::stream::DigitSource;

/// Reference matcher that never discards generated digits.
#[derive(Debug)]
pub struct NaiveMatcher {
    source: DigitSource,
    pattern: Pattern,
    accumulated: Vec<u8>,
    digit_budget: Option<u64>,
}

impl NaiveMatcher {
    /// Create a matcher for `pattern` over the stream started at `start`.
    pub fn new(start: u64, pattern: Pattern) -> Result<Self, SearchError> {
        if start == 0 {
            return Err(SearchError::InvalidStart);
        }
        Ok(Self {
            source: DigitSource::new(start),
            pattern,
            accumulated: Vec::new(),
            digit_budget: None,
        })
    }

    /// Fail with [`SearchError::BudgetExhausted`] instead of accumulating
    /// past `budget` digits.
    pub fn with_digit_budget(mut self, budget: u64) -> Self {
        self.digit_budget = Some(budget);
        self
    }

    /// Run the search to the first occurrence of the pattern.
    pub fn search(mut self) -> Result<MatchResult, SearchError> {
        loop {
            let block = self.source.next_block();
            self.accumulated.extend_from_slice(block);

            if let Some(offset) = find_first(&self.accumulated, self.pattern.as_bytes()) {
                let start = offset as u64 + 1;
                let end = start + self.pattern.len() as u64 - 1;
                return Ok(MatchResult { start, end });
            }

            if let Some(budget) = self.digit_budget {
                let digits_generated = self.accumulated.len() as u64;
                if digits_generated > budget {
                    return Err(SearchError::BudgetExhausted {
                        budget,
                        digits_generated,
                    });
                }
            }
        }
    }
}
