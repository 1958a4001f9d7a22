//! Per-integer digit production.
//!
//! The stream is never materialized: a [`DigitSource`] hands out the digits
//! of one integer at a time, which is the granularity the matchers consume
//! and re-check at.

/// Maximum decimal digits of a `u64` counter value.
const MAX_DIGITS: usize = 20;

/// Lazy producer of the digit stream formed by concatenating consecutive
/// integers.
///
/// Each call to [`next_block`](DigitSource::next_block) yields the full
/// decimal digit string of one integer, then advances the counter. The
/// source owns nothing but its counter and a fixed scratch buffer; it is
/// restarted fresh for every search.
#[derive(Debug, Clone)]
pub struct DigitSource {
    next_integer: u64,
    scratch: [u8; MAX_DIGITS],
}

impl DigitSource {
    /// Create a source whose first produced integer is `start`.
    ///
    /// Callers validate `start >= 1`; the source itself places no
    /// restriction on the counter.
    pub fn new(start: u64) -> Self {
        Self {
            next_integer: start,
            scratch: [0; MAX_DIGITS],
        }
    }

    /// Integer the next call to [`next_block`](DigitSource::next_block)
    /// will produce.
    pub fn peek_integer(&self) -> u64 {
        self.next_integer
    }

    /// Produce the ASCII decimal digits of the next integer.
    ///
    /// The returned slice borrows the source's scratch space and is only
    /// valid until the next call.
    pub fn next_block(&mut self) -> &[u8] {
        let len = encode_decimal(self.next_integer, &mut self.scratch);
        self.next_integer += 1;
        &self.scratch[MAX_DIGITS - len..]
    }

    /// Per-digit cursor over the stream, used by the linear generator.
    pub(crate) fn digits(self) -> Digits {
        Digits {
            source: self,
            pending: [0; MAX_DIGITS],
            len: 0,
            cursor: 0,
        }
    }
}

/// Cursor yielding the stream one ASCII digit at a time.
///
/// Deliberately not an `Iterator`: the stream never ends, so the cursor
/// exposes an inherent `next_digit` that cannot signal exhaustion.
#[derive(Debug, Clone)]
pub(crate) struct Digits {
    source: DigitSource,
    pending: [u8; MAX_DIGITS],
    len: usize,
    cursor: usize,
}

impl Digits {
    /// Next ASCII digit of the stream.
    pub(crate) fn next_digit(&mut self) -> u8 {
        if self.cursor == self.len {
            let block = self.source.next_block();
            self.len = block.len();
            self.pending[..self.len].copy_from_slice(block);
            self.cursor = 0;
        }
        let digit = self.pending[self.cursor];
        self.cursor += 1;
        digit
    }
}

/// Write `value` in decimal into the tail of `out`, returning the digit
/// count.
fn encode_decimal(mut value: u64, out: &mut [u8; MAX_DIGITS]) -> usize {
    let mut idx = MAX_DIGITS;
    loop {
        idx -= 1;
        out[idx] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    MAX_DIGITS - idx
}
