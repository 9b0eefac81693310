//! Errors.
//!
//! This crate recognizes exactly one user-visible error category: the input
//! text did not conform to the RFC-7159 number grammar. [`MalformedNumber`]
//! is subdivided into several variants purely so `Display` can point at what
//! went wrong; callers matching on `is_ok()` or propagating the error with
//! `?` never need to look past that.

use thiserror::Error as ErrorTrait;

/// The text passed to [`crate::parse_double`] is not a valid RFC-7159 number.
#[derive(ErrorTrait, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedNumber {
    #[error("empty input")]
    Empty,

    #[error("expected at least one digit at byte offset {offset}")]
    ExpectedDigit { offset: usize },

    #[error("leading zero must not be followed by further integer digits (byte offset {offset})")]
    LeadingZero { offset: usize },

    #[error("non-whitespace trailing characters after the numeric literal (byte offset {offset})")]
    TrailingCharacters { offset: usize },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(MalformedNumber::Empty.to_string(), "empty input");
        assert_eq!(
            MalformedNumber::TrailingCharacters { offset: 3 }.to_string(),
            "non-whitespace trailing characters after the numeric literal (byte offset 3)"
        );
    }
}
