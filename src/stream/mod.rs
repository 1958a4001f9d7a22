//! Digit stream production and linear positional queries.
//!
//! The stream is the infinite string formed by concatenating consecutive
//! integers from a chosen start (starting at 6: `678910111213...`). This
//! module produces it lazily and answers the simple positional queries;
//! substring search lives in [`crate::search`].

mod generate;
mod source;

pub use generate::{count_digit, digit_at, GenerateError};
pub use source::DigitSource;
