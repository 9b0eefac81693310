//! Power-of-ten lookup table for the Eisel-Lemire core.
//!
//! The table itself is mechanical: 128-bit normalized mantissas of `10^exp10`
//! for every `exp10` the fast path supports. Rather than hand-transcribe
//! ~600 constants, `build.rs` derives them with exact big-integer arithmetic
//! and writes them out as a `const` array, which we pull in here.

include!(concat!(env!("OUT_DIR"), "/power_table.rs"));

/// Looks up the normalized `(lo, hi)` 128-bit mantissa of `10^exp10`.
///
/// Returns `None` when `exp10` falls outside `[MIN_EXP10, MAX_EXP10]`; callers
/// (the driver) are expected to have already routed those cases to the
/// slow-path collaborator instead of calling this at all.
#[inline]
pub(crate) fn power_of_ten(exp10: i32) -> Option<(u64, u64)> {
    if exp10 < MIN_EXP10 || exp10 > MAX_EXP10 {
        return None;
    }
    Some(POWER_OF_TEN[(exp10 - MIN_EXP10) as usize])
}
