//! Linear positional queries over the stream.
//!
//! These answer "what digit is at position i" style questions by generating
//! the stream from the front, so their cost is proportional to the queried
//! position. The substring search in [`crate::search`] exists precisely
//! because this approach does not scale to billion-digit depths.

use thiserror::Error;

use super::source::DigitSource;

/// Error type for the linear generator queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Starting integer was zero.
    #[error("starting integer must be at least 1")]
    InvalidStart,

    /// Queried position was zero (positions are 1-indexed).
    #[error("position must be at least 1")]
    InvalidPosition,

    /// Digit to count was outside `0..=9`.
    #[error("digit to count must be between 0 and 9, got {0}")]
    InvalidDigit(u8),
}

/// Digit value (0-9) at 1-indexed `position` of the stream started at
/// `start`.
///
/// Starting at 999 the stream begins `999100010011002...`, so position 11
/// holds 1.
pub fn digit_at(start: u64, position: u64) -> Result<u8, GenerateError> {
    if start == 0 {
        return Err(GenerateError::InvalidStart);
    }
    if position == 0 {
        return Err(GenerateError::InvalidPosition);
    }

    let mut digits = DigitSource::new(start).digits();
    let mut remaining = position;
    loop {
        let digit = digits.next_digit();
        remaining -= 1;
        if remaining == 0 {
            return Ok(digit - b'0');
        }
    }
}

/// Occurrences of `digit` among the first `length` digits of the stream
/// started at `start`.
pub fn count_digit(start: u64, length: u64, digit: u8) -> Result<u64, GenerateError> {
    if start == 0 {
        return Err(GenerateError::InvalidStart);
    }
    if digit > 9 {
        return Err(GenerateError::InvalidDigit(digit));
    }

    let target = b'0' + digit;
    let mut digits = DigitSource::new(start).digits();
    let mut count = 0u64;
    for _ in 0..length {
        if digits.next_digit() == target {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_at_known_positions() {
        // Stream from 6: 678910111213...
        assert_eq!(digit_at(6, 1).unwrap(), 6);
        assert_eq!(digit_at(6, 11).unwrap(), 1);
        assert_eq!(digit_at(6, 12).unwrap(), 3);
        // Stream from 999: 999100010011002...
        assert_eq!(digit_at(999, 10).unwrap(), 0);
        assert_eq!(digit_at(999, 11).unwrap(), 1);
    }

    #[test]
    fn digit_at_rejects_invalid_input() {
        assert_eq!(digit_at(0, 1), Err(GenerateError::InvalidStart));
        assert_eq!(digit_at(1, 0), Err(GenerateError::InvalidPosition));
    }

    #[test]
    fn counts_fives_in_stream_prefix() {
        assert_eq!(count_digit(1, 100, 5).unwrap(), 11);
    }

    #[test]
    fn count_over_empty_prefix_is_zero() {
        assert_eq!(count_digit(1, 0, 5).unwrap(), 0);
    }

    #[test]
    fn count_rejects_invalid_input() {
        assert_eq!(count_digit(0, 10, 5), Err(GenerateError::InvalidStart));
        assert_eq!(count_digit(1, 10, 10), Err(GenerateError::InvalidDigit(10)));
    }
}
