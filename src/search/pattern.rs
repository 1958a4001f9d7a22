//! Pattern validation and prefix-table derivation.

use thiserror::Error;

/// Error type returned by pattern validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// Pattern was empty.
    #[error("pattern must be non-empty")]
    Empty,

    /// Pattern contained a character outside `'0'..='9'`.
    #[error("pattern contains non-digit character '{ch}' at position {position}")]
    NonDigit {
        /// Offending character.
        ch: char,
        /// 0-indexed offset of the character within the pattern text.
        position: usize,
    },
}

/// Validated decimal-digit needle, immutable for the duration of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    digits: Vec<u8>,
}

impl Pattern {
    /// Validate `text` as a non-empty, decimal-digit-only pattern.
    pub fn new(text: &str) -> Result<Self, PatternError> {
        if text.is_empty() {
            return Err(PatternError::Empty);
        }
        for (position, ch) in text.chars().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(PatternError::NonDigit { ch, position });
            }
        }
        Ok(Self {
            digits: text.as_bytes().to_vec(),
        })
    }

    /// Number of digits in the pattern (always at least 1).
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Pattern digits as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.digits
    }
}

/// Ordered proper prefixes of a pattern, longest to shortest.
///
/// Consulted on every failed match attempt to find the longest pattern
/// prefix that is also a suffix of the working buffer; that suffix is the
/// only part of the buffer that could still open a future match. Empty for
/// a single-digit pattern. Derived once per search, never mutated.
#[derive(Debug, Clone)]
pub struct PrefixTable {
    pattern: Vec<u8>,
}

impl PrefixTable {
    /// Derive the table for `pattern`.
    pub fn new(pattern: &Pattern) -> Self {
        Self {
            pattern: pattern.as_bytes().to_vec(),
        }
    }

    /// Number of proper prefixes (pattern length minus one).
    pub fn len(&self) -> usize {
        self.pattern.len() - 1
    }

    /// Iterate the proper prefixes, longest first.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        (1..self.pattern.len()).rev().map(move |len| &self.pattern[..len])
    }

    /// Length of the longest proper prefix of the pattern that is a suffix
    /// of `buffer`, if any.
    ///
    /// Longest-first order matters for self-overlapping patterns such as
    /// `11111`: folding to anything shorter than the maximal overlap would
    /// discard digits still needed for a match.
    pub fn longest_suffix_overlap(&self, buffer: &[u8]) -> Option<usize> {
        self.iter()
            .find(|prefix| buffer.ends_with(prefix))
            .map(<[u8]>::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_non_digit_patterns() {
        assert_eq!(Pattern::new(""), Err(PatternError::Empty));
        assert_eq!(
            Pattern::new("12a4"),
            Err(PatternError::NonDigit { ch: 'a', position: 2 })
        );
    }

    #[test]
    fn prefixes_run_longest_to_shortest() {
        let pattern = Pattern::new("1234").unwrap();
        let table = PrefixTable::new(&pattern);
        let prefixes: Vec<&[u8]> = table.iter().collect();
        assert_eq!(
            prefixes,
            vec![b"123".as_slice(), b"12".as_slice(), b"1".as_slice()]
        );
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn single_digit_pattern_has_empty_table() {
        let pattern = Pattern::new("7").unwrap();
        let table = PrefixTable::new(&pattern);
        assert_eq!(table.len(), 0);
        assert_eq!(table.iter().count(), 0);
        assert_eq!(table.longest_suffix_overlap(b"777"), None);
    }

    #[test]
    fn overlap_picks_the_maximal_suffix() {
        let pattern = Pattern::new("11111").unwrap();
        let table = PrefixTable::new(&pattern);
        assert_eq!(table.longest_suffix_overlap(b"9111"), Some(3));
        assert_eq!(table.longest_suffix_overlap(b"1111"), Some(4));
        assert_eq!(table.longest_suffix_overlap(b"190"), None);
    }
}
