//! Single-pass scan of an RFC-7159 number literal into a [`CanonicalNumber`].
//!
//! Mirrors the digit-scanning style of a hand-rolled JSON number lexer: plain
//! byte indexing with small helper macros instead of a `Chars` iterator, since
//! the grammar is entirely ASCII and indexing lets us report byte offsets in
//! errors for free.

use crate::error::MalformedNumber;

/// Largest number of significant digits retained in `mantissa`; digits beyond
/// this are dropped and `truncated` is set instead.
const MAX_MANTISSA_DIGITS: u32 = 19;

/// Saturation bound for the explicit `e±NNN` exponent. Anything beyond this
/// clearly yields +-0 or +-infinity once combined with the mantissa, so we only
/// need to preserve the sign and "it's huge" information.
const MAX_EXPLICIT_EXPONENT: i64 = 10_000;

/// The lexer's output: a decimal value expressed as `(-1)^negative * mantissa * 10^exp10`,
/// or, when `truncated`, a half-open bracket `[mantissa * 10^exp10, (mantissa+1) * 10^exp10)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CanonicalNumber {
    pub negative: bool,
    pub mantissa: u64,
    pub exp10: i32,
    pub truncated: bool,
}

macro_rules! is_digit {
    ($data:expr, $i:expr) => {
        $i < $data.len() && $data[$i].is_ascii_digit()
    };
}

macro_rules! digit {
    ($data:expr, $i:expr) => {
        ($data[$i] - b'0') as u64
    };
}

/// Scans `text` as a complete RFC-7159 number literal (the whole string must
/// be consumed; there is no provision for a trailing, non-numeric suffix).
pub(crate) fn lex(text: &str) -> Result<CanonicalNumber, MalformedNumber> {
    let data = text.as_bytes();
    if data.is_empty() {
        return Err(MalformedNumber::Empty);
    }

    let mut index = 0;
    let negative = if data[0] == b'-' {
        index += 1;
        true
    } else {
        false
    };

    if !is_digit!(data, index) {
        return Err(MalformedNumber::ExpectedDigit { offset: index });
    }

    let int_start = index;
    if data[index] == b'0' {
        index += 1;
        if is_digit!(data, index) {
            return Err(MalformedNumber::LeadingZero { offset: index });
        }
    } else {
        while is_digit!(data, index) {
            index += 1;
        }
    }

    let mut mantissa: u64 = 0;
    let mut digits_seen: u32 = 0;
    let mut exp10: i32 = 0;
    let mut truncated = false;
    accumulate_digits(
        &data[int_start..index],
        &mut mantissa,
        &mut digits_seen,
        &mut truncated,
        &mut exp10,
        true,
    );

    if index < data.len() && data[index] == b'.' {
        index += 1;
        let frac_start = index;
        if !is_digit!(data, index) {
            return Err(MalformedNumber::ExpectedDigit { offset: index });
        }
        while is_digit!(data, index) {
            index += 1;
        }
        let frac_digits = &data[frac_start..index];
        let digits_before = digits_seen;
        accumulate_digits(frac_digits, &mut mantissa, &mut digits_seen, &mut truncated, &mut exp10, false);
        // Every fractional digit that actually entered the mantissa shifts
        // the decimal point left by one place. Fractional digits dropped for
        // truncation need no such compensation: they're below the precision
        // the mantissa already captures, not a multiplier on it.
        exp10 -= (digits_seen - digits_before) as i32;
    }

    let mut explicit_exp: i64 = 0;
    if index < data.len() && (data[index] == b'e' || data[index] == b'E') {
        index += 1;
        let exp_negative = if index < data.len() && (data[index] == b'+' || data[index] == b'-') {
            let neg = data[index] == b'-';
            index += 1;
            neg
        } else {
            false
        };
        if !is_digit!(data, index) {
            return Err(MalformedNumber::ExpectedDigit { offset: index });
        }
        while is_digit!(data, index) {
            explicit_exp = (explicit_exp * 10 + digit!(data, index) as i64).min(MAX_EXPLICIT_EXPONENT);
            index += 1;
        }
        if exp_negative {
            explicit_exp = -explicit_exp;
        }
    }

    if index != data.len() {
        return Err(MalformedNumber::TrailingCharacters { offset: index });
    }

    let exp10 = exp10.saturating_add(explicit_exp.clamp(i32::MIN as i64, i32::MAX as i64) as i32);

    Ok(CanonicalNumber { negative, mantissa, exp10, truncated })
}

/// Folds ASCII digits into `mantissa`, freezing it at [`MAX_MANTISSA_DIGITS`]
/// digits and setting `truncated` for the rest. `pre_decimal` digits dropped
/// this way still represent whole-number magnitude that was discarded, so
/// `exp10` is bumped to compensate; dropped fractional digits fall below the
/// mantissa's retained precision and need no such compensation.
fn accumulate_digits(
    digits: &[u8],
    mantissa: &mut u64,
    digits_seen: &mut u32,
    truncated: &mut bool,
    exp10: &mut i32,
    pre_decimal: bool,
) {
    for &byte in digits {
        let d = (byte - b'0') as u64;
        if *digits_seen < MAX_MANTISSA_DIGITS {
            *mantissa = *mantissa * 10 + d;
            *digits_seen += 1;
        } else {
            *truncated = true;
            if pre_decimal {
                *exp10 += 1;
            }
        }
    }
}
