//! Bounded-memory incremental matcher.
//!
//! Retains only the longest suffix of the generated stream that could still
//! be the prefix of a future match, so memory stays proportional to the
//! pattern length no matter how deep the first occurrence lies. The
//! reference scenario (`987654321` from start 1) matches beyond 1.6 billion
//! digits; accumulating that stream outright is what [`super::naive`]
//! exists to demonstrate the cost of.

use tracing::{debug, trace};

use super::{MatchResult, Pattern, PrefixTable, SearchError};
use crate::stream::DigitSource;

/// Incremental searcher whose working buffer is shorter than the pattern
/// between iterations.
///
/// Each search call exclusively owns its buffer, its discarded-digit
/// counter, and its prefix table; concurrent searches cannot interfere.
#[derive(Debug)]
pub struct BoundedMatcher {
    source: DigitSource,
    pattern: Pattern,
    prefixes: PrefixTable,
    buffer: Vec<u8>,
    /// Digits permanently dropped from the front of the conceptual stream
    /// before the current buffer. Monotonically non-decreasing.
    discarded: u64,
    digits_generated: u64,
    digit_budget: Option<u64>,
}

impl BoundedMatcher {
    /// Create a matcher for `pattern` over the stream started at `start`.
    pub fn new(start: u64, pattern: Pattern) -> Result<Self, SearchError> {
        if start == 0 {
            return Err(SearchError::InvalidStart);
        }
        let prefixes = PrefixTable::new(&pattern);
        let buffer = Vec::with_capacity(pattern.len() * 2);
        Ok(Self {
            source: DigitSource::new(start),
            pattern,
            prefixes,
            buffer,
            discarded: 0,
            digits_generated: 0,
            digit_budget: None,
        })
    }

    /// Fail with [`SearchError::BudgetExhausted`] instead of searching past
    /// `budget` generated digits.
    ///
    /// Termination without a budget is assumed, not proven: consecutive
    /// integer representations are dense enough that every finite digit
    /// pattern has recurred in practice.
    pub fn with_digit_budget(mut self, budget: u64) -> Self {
        self.digit_budget = Some(budget);
        self
    }

    /// Digits permanently discarded so far.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    /// Total digits generated so far.
    pub fn digits_generated(&self) -> u64 {
        self.digits_generated
    }

    /// Run the search to the first occurrence of the pattern.
    ///
    /// Positions in the result are 1-indexed and inclusive over the
    /// conceptual stream, not the buffer.
    pub fn search(mut self) -> Result<MatchResult, SearchError> {
        loop {
            if let Some(result) = self.step()? {
                debug!(
                    start = result.start,
                    end = result.end,
                    digits_generated = self.digits_generated,
                    "pattern matched"
                );
                return Ok(result);
            }
        }
    }

    /// One iteration: append the next integer's digits, scan, compact.
    fn step(&mut self) -> Result<Option<MatchResult>, SearchError> {
        let block = self.source.next_block();
        self.buffer.extend_from_slice(block);
        self.digits_generated += block.len() as u64;

        if let Some(offset) = find_first(&self.buffer, self.pattern.as_bytes()) {
            let start = self.discarded + offset as u64 + 1;
            let end = start + self.pattern.len() as u64 - 1;
            return Ok(Some(MatchResult { start, end }));
        }

        self.compact();

        if let Some(budget) = self.digit_budget {
            if self.digits_generated > budget {
                return Err(SearchError::BudgetExhausted {
                    budget,
                    digits_generated: self.digits_generated,
                });
            }
        }
        Ok(None)
    }

    /// Fold the buffer down to the longest pattern prefix that is one of
    /// its suffixes.
    ///
    /// Everything in front of the retained suffix can never start a match:
    /// a match ending inside it would already have been found, and a match
    /// reaching past it would need a longer suffix overlap than exists.
    /// Leaves the buffer strictly shorter than the pattern.
    fn compact(&mut self) {
        let retained = self
            .prefixes
            .longest_suffix_overlap(&self.buffer)
            .unwrap_or(0);
        let dropped = self.buffer.len() - retained;
        self.buffer.drain(..dropped);
        self.discarded += dropped as u64;
        trace!(
            dropped,
            retained,
            discarded = self.discarded,
            "compacted buffer"
        );
    }
}

/// First occurrence of `needle` in `haystack`.
///
/// Plain quadratic scan; buffers here are never longer than the needle plus
/// one integer's digits, so nothing fancier pays for itself.
pub(crate) fn find_first(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}
