//! Exact-double shortcut: when the mantissa and exponent are small enough,
//! a single (or double) correctly-rounded `f64` multiply/divide reproduces
//! the exact decimal value, so we can skip the Eisel-Lemire core entirely.

/// `10^0 ..= 10^22`, each exactly representable in `f64`.
const POW10: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Largest integer exactly representable in `f64` without losing precision.
const MAX_EXACT_INT_F64: f64 = 1e15;

/// Attempts the exact-double shortcut. Returns `None` when the
/// preconditions (`mantissa < 2^53`,
/// `-22 <= exp10 <= 37` with the extended-range caveat) don't hold, or when
/// an intermediate value would not be an exact double.
///
/// Precondition (checked by the caller): the canonical number is not
/// truncated.
pub(crate) fn shortcut(mantissa: u64, exp10: i32) -> Option<f64> {
    if mantissa >= (1u64 << 53) {
        return None;
    }
    let m = mantissa as f64;

    if (-22..=22).contains(&exp10) {
        return Some(if exp10 < 0 {
            m / POW10[(-exp10) as usize]
        } else {
            m * POW10[exp10 as usize]
        });
    }

    if (23..=37).contains(&exp10) {
        // Shift 22 places of the exponent into the mantissa first; if the
        // intermediate product is still an exact integer in `f64`, the
        // final multiply by `10^22` is also exact.
        let v = m * POW10[(exp10 - 22) as usize];
        if v.abs() <= MAX_EXACT_INT_F64 {
            return Some(v * POW10[22]);
        }
    }

    None
}
