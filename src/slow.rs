//! The fallback path for numbers the fast paths can't prove a correct
//! rounding for.
//!
//! That fallback is the standard library's own `f64::from_str`, which has
//! been a correctly-rounded decimal-to-binary parser since Rust 1.55 (it
//! dispatches through the same class of arbitrary-precision technique this
//! crate fast-paths around). Reimplementing that machinery here would just
//! be a worse copy of what `core` already ships.
//!
//! Critically, this takes the caller's original literal, not a
//! reconstruction from the (possibly 19-digit-truncated) canonical mantissa:
//! when the fast paths disagree because real digits live past the 19th, only
//! the untruncated text carries enough precision to resolve them correctly.

/// Parses the original literal with `f64::from_str`.
pub(crate) fn slow_parse(text: &str) -> f64 {
    text.parse().expect("text already passed the RFC-7159 grammar scan")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_plain_literals() {
        assert_eq!(slow_parse("1.23"), 1.23);
        assert_eq!(slow_parse("-5"), -5.0);
    }

    #[test]
    fn handles_extreme_exponents() {
        assert_eq!(slow_parse("1e400"), f64::INFINITY);
        assert_eq!(slow_parse("1e-400"), 0.0);
    }

    #[test]
    fn resolves_precision_past_the_truncated_mantissa() {
        // 25 nines: the canonical mantissa would truncate to 19 digits, but
        // the full text still parses via the untruncated literal.
        let text = "0.".to_string() + &"9".repeat(25);
        assert_eq!(slow_parse(&text), text.parse::<f64>().unwrap());
    }
}
